use crate::graph::{Graph, NodeId};

/// Flattens the instruction graph into assembly lines.
///
/// Walks the root nodes in insertion order, recursing through children,
/// then drops empty lines and appends the terminating `HALT`. Comment
/// lines survive here; the caller filters them before assembly.
pub fn flatten(graph: &Graph) -> Vec<String> {
    let mut lines = Vec::new();
    for root in graph.roots() {
        flatten_node(graph, root, &mut lines);
    }

    lines.retain(|line| !line.trim().is_empty());
    lines.push("HALT".to_owned());
    lines
}

fn flatten_node(graph: &Graph, id: NodeId, lines: &mut Vec<String>) {
    let node = graph.node(id);
    let name = node.name.as_str();

    if name.starts_with("decl_") {
        lines.push(format!("; declaration of {}", &name["decl_".len()..]));
    } else if name.starts_with("assign_") {
        lines.push(format!("; assignment to {}", &name["assign_".len()..]));
    } else if name == "procers" {
        lines.push("NOP ; begin procers".to_owned());
        for &child in &node.children {
            flatten_node(graph, child, lines);
        }
        lines.push("NOP ; end procers".to_owned());
    } else if name == "colectavgB" {
        lines.push("NOP ; colectavgB stub".to_owned());
    } else if name == "while" {
        lines.push("NOP ; begin while".to_owned());
        for &child in &node.children {
            flatten_node(graph, child, lines);
        }
        lines.push("NOP ; end while".to_owned());
    } else {
        lines.push(format!("; unrecognized node: {}", name));
    }
}
