use crate::ast::Expr;
use crate::context::CompileContext;
use crate::Result;

/// Lowers `expr` into the `target` register, appending assembly lines to
/// `code`.
///
/// Variables move with `MOV` (or nothing, when already in place),
/// constants load with `LOADK`, and binary operations compile the left
/// side into the target, then either fold a constant right side into the
/// immediate form or evaluate it into a fresh temporary and use the
/// register form.
pub fn compile_expr(
    ctx: &mut CompileContext,
    expr: &Expr,
    target: u8,
    code: &mut Vec<String>,
) -> Result<()> {
    match expr {
        Expr::Var(name) => {
            let source = ctx.register(name)?;
            if source != target {
                code.push(format!("MOV R{}, R{}", target, source));
            }
        }

        Expr::Const(value) => {
            code.push(format!("LOADK R{}, {}", target, value));
        }

        Expr::BinOp { op, lhs, rhs } => {
            compile_expr(ctx, lhs, target, code)?;
            if let Expr::Const(value) = **rhs {
                code.push(format!("{} R{}, {}", op.immediate_mnemonic(), target, value));
            } else {
                let temp = ctx.alloc_temp()?;
                compile_expr(ctx, rhs, temp, code)?;
                code.push(format!("{} R{}, R{}", op.register_mnemonic(), target, temp));
            }
        }
    }

    Ok(())
}
