//! Per-variant instruction formatting.

use core::fmt::{self, Write};

use crate::{dfg::InstData, printer::ids::IdRegistry, value::Value};

/// Write the right-hand side of an instruction line, e.g. `Load(lvalue=%2)`.
///
/// Operand references are resolved through `ids`, except the raw branch
/// arguments of `br` and the condition of `cond_br` (printed as `?`).
pub(crate) fn write_inst_data<W: Write + ?Sized>(
    out: &mut W,
    ids: &IdRegistry<'_>,
    data: &InstData,
) -> fmt::Result {
    let opcode = data.opcode();
    match data {
        InstData::Call { callee, args } => {
            write!(out, "{}(fn={}", opcode, ids.value_id(*callee))?;
            if !args.is_empty() {
                out.write_str(",args=(")?;
                write_value_list(out, ids, args, ' ')?;
                out.write_char(')')?;
            }
            out.write_char(')')
        }
        InstData::DeclRef { decl } => write!(out, "{}(decl={})", opcode, decl.name()),
        InstData::IntegerLiteral { literal } => {
            write!(out, "{}(val={},width={})", opcode, literal, literal.width())
        }
        InstData::Load { lvalue } => write!(out, "{}(lvalue={})", opcode, ids.value_id(*lvalue)),
        InstData::ThisApply { callee, arg } => write!(
            out,
            "{}(fn={},arg={})",
            opcode,
            ids.value_id(*callee),
            ids.value_id(*arg)
        ),
        InstData::Tuple { elements } => {
            write!(out, "{}(", opcode)?;
            write_value_list(out, ids, elements, ',')?;
            out.write_char(')')
        }
        InstData::TypeOf { ty } => write!(out, "{}(type={})", opcode, ty),
        InstData::Return { value } => {
            write!(out, "{}", opcode)?;
            if let Some(value) = value {
                write!(out, "({})", ids.value_id(*value))?;
            }
            Ok(())
        }
        InstData::Br { target, args } => {
            write!(out, "{} {}", opcode, ids.block_id(*target))?;
            if !args.is_empty() {
                out.write_char('(')?;
                // Arena indices, not session numbers: block arguments have no
                // resolvable identifiers yet.
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.write_char(' ')?;
                    }
                    write!(out, "%{}", arg.raw_index())?;
                }
                out.write_char(')')?;
            }
            Ok(())
        }
        InstData::CondBr { cond: _, branches } => write!(
            out,
            "{}(cond=?,branches=({},{}))",
            opcode,
            ids.block_id(branches[0]),
            ids.block_id(branches[1])
        ),
    }
}

fn write_value_list<W: Write + ?Sized>(
    out: &mut W,
    ids: &IdRegistry<'_>,
    values: &[Value],
    separator: char,
) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.write_char(separator)?;
        }
        write!(out, "{}", ids.value_id(*value))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entity::{Block, Inst},
        graph::Graph,
        literal::Decl,
        types::Type,
    };

    /// Lay out `datas` in one block of a fresh graph, then format the last one.
    fn format_last(datas: Vec<InstData>) -> String {
        let mut graph = Graph::new();
        let block = graph.create_block();
        graph.append_block(block);
        let mut last = None;
        for data in datas {
            let inst = graph.create_inst(data);
            graph.append_inst(inst, block);
            last = Some(inst);
        }
        let ids = IdRegistry::new(&graph);
        let data = graph.inst_data(last.unwrap()).unwrap();
        let mut out = String::new();
        write_inst_data(&mut out, &ids, data).unwrap();
        out
    }

    #[test]
    fn test_call_without_args() {
        let f = Inst::new(0);
        let text = format_last(vec![
            InstData::decl_ref(Decl::new("f")),
            InstData::call(f, vec![]),
        ]);
        assert_eq!(text, "Call(fn=%0)");
    }

    #[test]
    fn test_call_with_args() {
        let f = Value::Inst(Inst::new(0));
        let x = Value::Inst(Inst::new(1));
        let one = format_last(vec![
            InstData::decl_ref(Decl::new("f")),
            InstData::integer(1, 64),
            InstData::call(f, vec![x]),
        ]);
        assert_eq!(one, "Call(fn=%0,args=(%1))");

        let two = format_last(vec![
            InstData::decl_ref(Decl::new("f")),
            InstData::integer(1, 64),
            InstData::call(f, vec![x, f]),
        ]);
        assert_eq!(two, "Call(fn=%0,args=(%1 %0))");
    }

    #[test]
    fn test_leaf_instructions() {
        assert_eq!(
            format_last(vec![InstData::decl_ref(Decl::new("swap"))]),
            "DeclRef(decl=swap)"
        );
        assert_eq!(
            format_last(vec![InstData::integer(-3, 16)]),
            "Integer(val=-3,width=16)"
        );
        assert_eq!(
            format_last(vec![InstData::type_of(Type::Tuple(vec![Type::named("Int")]))]),
            "TypeOf(type=(Int))"
        );
    }

    #[test]
    fn test_load_and_this_apply() {
        let a = Inst::new(0);
        let b = Inst::new(1);
        assert_eq!(
            format_last(vec![InstData::decl_ref(Decl::new("x")), InstData::load(a)]),
            "Load(lvalue=%0)"
        );
        assert_eq!(
            format_last(vec![
                InstData::decl_ref(Decl::new("m")),
                InstData::decl_ref(Decl::new("self")),
                InstData::this_apply(a, b),
            ]),
            "ThisApply(fn=%0,arg=%1)"
        );
    }

    #[test]
    fn test_tuple() {
        assert_eq!(format_last(vec![InstData::tuple(vec![])]), "Tuple()");
        let a = Value::Inst(Inst::new(0));
        let b = Value::Inst(Inst::new(1));
        assert_eq!(
            format_last(vec![
                InstData::integer(1, 8),
                InstData::integer(2, 8),
                InstData::tuple(vec![a, b, a]),
            ]),
            "Tuple(%0,%1,%0)"
        );
    }

    #[test]
    fn test_return() {
        assert_eq!(format_last(vec![InstData::ret(None)]), "Return");
        assert_eq!(
            format_last(vec![
                InstData::integer(0, 1),
                InstData::ret(Some(Inst::new(0).into())),
            ]),
            "Return(%0)"
        );
    }

    #[test]
    fn test_branches() {
        let b0 = Block::new(0);
        assert_eq!(format_last(vec![InstData::br(b0, vec![])]), "br bb0");
        assert_eq!(
            format_last(vec![InstData::integer(1, 1), InstData::cond_br(Inst::new(0), b0, b0)]),
            "cond_br(cond=?,branches=(bb0,bb0))"
        );
    }
}
