use crate::ast::{BinOp, Expr};
use crate::context::CompileContext;
use crate::expr::compile_expr;
use crate::graph::{Graph, NodeId};
use crate::{new_parser_error, Error, Result};
use matches::debug_assert_matches;
use pest::iterators::{Pair, Pairs};
use pest::prec_climber::{Assoc, Operator, PrecClimber};
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "stre.pest"]
pub struct StreParser;

pub fn process_program(pair: Pair<Rule>) -> Result<(Graph, CompileContext)> {
    debug_assert_matches!(pair.as_rule(), Rule::program);

    let mut graph = Graph::new();
    let mut ctx = CompileContext::new();

    for statement in pair.into_inner() {
        if statement.as_rule() == Rule::EOI {
            continue;
        }
        process_statement(statement, &mut graph, &mut ctx, None)?;
    }

    Ok((graph, ctx))
}

fn process_statement(
    pair: Pair<Rule>,
    graph: &mut Graph,
    ctx: &mut CompileContext,
    parent: Option<NodeId>,
) -> Result<()> {
    debug_assert_matches!(pair.as_rule(), Rule::statement);
    let inner = pair.into_inner().next().unwrap();

    match inner.as_rule() {
        Rule::declaration => {
            ctx.reset_temps();
            let mut pairs = inner.into_inner();
            let _keyword = pairs.next().unwrap();
            let _type_name = pairs.next().unwrap();
            let name = pairs.next().unwrap().as_str().to_owned();

            let register = ctx.register(&name)?;
            graph.add_node(format!("decl_{}", name), parent);

            if let Some(expression) = pairs.next() {
                let expr = process_expression(expression)?;
                lower_into(graph, ctx, &expr, register)?;
            }
        }

        Rule::assignment => {
            ctx.reset_temps();
            let mut pairs = inner.into_inner();
            let name = pairs.next().unwrap().as_str().to_owned();
            let expression = pairs.next().unwrap();

            let register = ctx.register(&name)?;
            graph.add_node(format!("assign_{}", name), parent);

            let expr = process_expression(expression)?;
            lower_into(graph, ctx, &expr, register)?;
        }

        Rule::while_loop => {
            let node = graph.add_node("while".to_owned(), parent);
            let mut pairs = inner.into_inner();
            let _keyword = pairs.next().unwrap();
            // The condition is parsed but produces no code.
            let _condition = pairs.next().unwrap();
            for statement in pairs {
                process_statement(statement, graph, ctx, Some(node))?;
            }
        }

        Rule::process_call => {
            let mut pairs = inner.into_inner();
            let process = pairs.next().unwrap().as_str().to_owned();
            let argument = pairs.next().unwrap().as_str().to_owned();

            let node = graph.add_node(process.clone(), parent);
            graph.node_mut(node).ports.push(argument.clone());
            graph.add_instruction(format!("; call to {} with {}", process, argument));
        }

        Rule::function_call => {}

        _ => unreachable!(),
    }

    Ok(())
}

fn lower_into(graph: &mut Graph, ctx: &mut CompileContext, expr: &Expr, target: u8) -> Result<()> {
    let mut code = Vec::new();
    compile_expr(ctx, expr, target, &mut code)?;
    for line in code {
        graph.add_instruction(line);
    }
    Ok(())
}

fn process_expression(pair: Pair<Rule>) -> Result<Expr> {
    debug_assert_matches!(pair.as_rule(), Rule::expression);
    climb(pair.into_inner())
}

fn climb(pairs: Pairs<Rule>) -> Result<Expr> {
    let climber = PrecClimber::new(vec![
        Operator::new(Rule::plus, Assoc::Left) | Operator::new(Rule::minus, Assoc::Left),
        Operator::new(Rule::times, Assoc::Left) | Operator::new(Rule::divide, Assoc::Left),
    ]);

    climber.climb(pairs, primary, |lhs, op, rhs| {
        let op = match op.as_rule() {
            Rule::plus => BinOp::Add,
            Rule::minus => BinOp::Sub,
            Rule::times => BinOp::Mul,
            Rule::divide => BinOp::Div,
            _ => unreachable!(),
        };
        Ok(Expr::BinOp {
            op,
            lhs: Box::new(lhs?),
            rhs: Box::new(rhs?),
        })
    })
}

fn primary(pair: Pair<Rule>) -> Result<Expr> {
    match pair.as_rule() {
        Rule::expression => climb(pair.into_inner()),
        Rule::identifier => Ok(Expr::Var(pair.as_str().to_owned())),
        Rule::number => {
            let span = pair.as_span();
            let text = pair.as_str();
            if text.contains('.') {
                // Float literals are truncated; the target machine is integral.
                let value: f64 = text.parse().map_err(|_| {
                    Error::from(new_parser_error(
                        span,
                        format!("Parsing number failed: {}", text),
                    ))
                })?;
                Ok(Expr::Const(value as i64))
            } else {
                text.parse::<i64>().map(Expr::Const).map_err(|err| {
                    Error::from(new_parser_error(
                        span,
                        format!("Parsing integer failed: {}", err),
                    ))
                })
            }
        }
        _ => unreachable!(),
    }
}
