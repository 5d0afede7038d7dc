//! Lowering a parsed graph body onto a `cfg_ir::Graph`.
//!
//! Two passes: labels and block parameters are bound first so branches may
//! name later blocks, then statements are lowered in text order. Instruction
//! results must be defined before they are used.

use std::collections::{HashMap, HashSet};

use cfg_ir::{Block, Decl, Graph, InstData, Value, MAX_LITERAL_WIDTH};

use super::{
    error::ParseError,
    syntax::{GraphAst, Op, Stmt},
};

struct Scope<'a> {
    source_len: usize,
    labels: HashMap<&'a str, Block>,
    values: HashMap<&'a str, Value>,
}

impl<'a> Scope<'a> {
    fn position(&self, rest_len: usize) -> usize {
        self.source_len - rest_len
    }

    fn block(&self, name: &str, rest_len: usize) -> Result<Block, ParseError> {
        self.labels.get(name).copied().ok_or_else(|| {
            ParseError::new(format!("undefined label '{}'", name), self.position(rest_len))
        })
    }

    fn value(&self, name: &str, rest_len: usize) -> Result<Value, ParseError> {
        self.values.get(name).copied().ok_or_else(|| {
            ParseError::new(format!("undefined value '%{}'", name), self.position(rest_len))
        })
    }

    fn values(&self, names: &[&str], rest_len: usize) -> Result<Vec<Value>, ParseError> {
        names.iter().map(|name| self.value(name, rest_len)).collect()
    }

    fn define(&mut self, name: &'a str, value: Value, rest_len: usize) -> Result<(), ParseError> {
        if self.values.insert(name, value).is_some() {
            return Err(ParseError::new(
                format!("value '%{}' is defined more than once", name),
                self.position(rest_len),
            ));
        }
        Ok(())
    }
}

pub(crate) fn lower_graph(source: &str, ast: &GraphAst<'_>) -> Result<Graph, ParseError> {
    let mut graph = Graph::new();
    let mut scope = Scope {
        source_len: source.len(),
        labels: HashMap::new(),
        values: HashMap::new(),
    };

    let mut blocks = Vec::with_capacity(ast.blocks.len());
    for block_ast in &ast.blocks {
        let block = graph.create_block();
        if scope.labels.insert(block_ast.label, block).is_some() {
            return Err(ParseError::new(
                format!("label '{}' is defined more than once", block_ast.label),
                scope.position(block_ast.rest_len),
            ));
        }
        graph.append_block(block);
        for (name, ty) in &block_ast.params {
            let arg = graph.append_block_arg(block, ty.clone());
            scope.define(*name, arg.into(), block_ast.rest_len)?;
        }
        blocks.push(block);
    }

    let mut explicit_preds = HashSet::new();
    for (block_ast, &block) in ast.blocks.iter().zip(&blocks) {
        if let Some(preds) = &block_ast.preds {
            explicit_preds.insert(block);
            for pred in preds {
                let pred = scope.block(pred, block_ast.rest_len)?;
                graph.add_pred(block, pred);
            }
        }
    }

    for (block_ast, &block) in ast.blocks.iter().zip(&blocks) {
        for stmt in &block_ast.stmts {
            let data = lower_op(&scope, stmt)?;
            for &succ in data.successors() {
                if !explicit_preds.contains(&succ) {
                    graph.add_pred(succ, block);
                }
            }
            let inst = graph.create_inst(data);
            graph.append_inst(inst, block);
            if let Some(name) = stmt.result {
                scope.define(name, inst.into(), stmt.rest_len)?;
            }
        }
    }

    Ok(graph)
}

fn lower_op(scope: &Scope<'_>, stmt: &Stmt<'_>) -> Result<InstData, ParseError> {
    let at = stmt.rest_len;
    let data = match &stmt.op {
        Op::Call { callee, args } => {
            InstData::call(scope.value(callee, at)?, scope.values(args, at)?)
        }
        Op::DeclRef(name) => InstData::decl_ref(Decl::new(*name)),
        Op::Integer { value, width } => {
            if !(1..=MAX_LITERAL_WIDTH).contains(width) {
                return Err(ParseError::new(
                    format!(
                        "integer width must be in 1..={}, got {}",
                        MAX_LITERAL_WIDTH, width
                    ),
                    scope.position(at),
                ));
            }
            InstData::integer(*value, *width)
        }
        Op::Load(lvalue) => InstData::load(scope.value(lvalue, at)?),
        Op::ThisApply { callee, arg } => {
            InstData::this_apply(scope.value(callee, at)?, scope.value(arg, at)?)
        }
        Op::Tuple(elements) => InstData::tuple(scope.values(elements, at)?),
        Op::TypeOf(ty) => InstData::type_of(ty.clone()),
        Op::Return(value) => InstData::ret(value.map(|v| scope.value(v, at)).transpose()?),
        Op::Br { target, args } => {
            InstData::br(scope.block(target, at)?, scope.values(args, at)?)
        }
        Op::CondBr { cond, targets } => InstData::cond_br(
            scope.value(cond, at)?,
            scope.block(targets[0], at)?,
            scope.block(targets[1], at)?,
        ),
    };
    Ok(data)
}
