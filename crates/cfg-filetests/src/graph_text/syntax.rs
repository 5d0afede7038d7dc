//! Graph, block, and statement parsers producing an unresolved syntax tree.
//!
//! Names are kept as borrowed text here; binding them to blocks and values
//! happens in `lower`.

use cfg_ir::Type;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, satisfy, space0, space1},
    combinator::{map, not, opt, peek},
    multi::{many0, separated_list0},
    sequence::{delimited, preceded, terminated, tuple},
    IResult,
};

use super::{
    primitives::{identifier, integer, label, parse_type, value_name, width},
    whitespace::blank,
};

/// A parsed `graph { ... }` body
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GraphAst<'a> {
    pub blocks: Vec<BlockAst<'a>>,
}

/// A block header and its statements
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BlockAst<'a> {
    pub label: &'a str,
    pub params: Vec<(&'a str, Type)>,
    /// Explicit predecessor list; when present, branches do not add edges
    pub preds: Option<Vec<&'a str>>,
    pub stmts: Vec<Stmt<'a>>,
    /// Length of the input remaining at the header, for error positions
    pub rest_len: usize,
}

/// One instruction, optionally bound to a name
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Stmt<'a> {
    pub result: Option<&'a str>,
    pub op: Op<'a>,
    pub rest_len: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op<'a> {
    Call { callee: &'a str, args: Vec<&'a str> },
    DeclRef(&'a str),
    Integer { value: i128, width: u32 },
    Load(&'a str),
    ThisApply { callee: &'a str, arg: &'a str },
    Tuple(Vec<&'a str>),
    TypeOf(Type),
    Return(Option<&'a str>),
    Br { target: &'a str, args: Vec<&'a str> },
    CondBr { cond: &'a str, targets: [&'a str; 2] },
}

/// Match `word` only when it is not the prefix of a longer name
fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(
        tag(word),
        not(peek(satisfy(|c: char| c.is_ascii_alphanumeric() || c == '_'))),
    )
}

fn comma(input: &str) -> IResult<&str, char> {
    delimited(space0, char(','), space0)(input)
}

/// Parse `(%a, %b, ...)`
fn value_list(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(
        terminated(char('('), blank),
        separated_list0(tuple((blank, char(','), blank)), value_name),
        preceded(blank, char(')')),
    )(input)
}

fn parse_call(input: &str) -> IResult<&str, Op<'_>> {
    let (input, _) = terminated(keyword("call"), space1)(input)?;
    let (input, callee) = value_name(input)?;
    let (input, args) = preceded(space0, value_list)(input)?;
    Ok((input, Op::Call { callee, args }))
}

fn parse_decl_ref(input: &str) -> IResult<&str, Op<'_>> {
    map(
        preceded(terminated(keyword("decl_ref"), space1), identifier),
        Op::DeclRef,
    )(input)
}

fn parse_integer(input: &str) -> IResult<&str, Op<'_>> {
    let (input, _) = terminated(keyword("integer"), space1)(input)?;
    let (input, value) = terminated(integer, space0)(input)?;
    let (input, _) = terminated(char(':'), space0)(input)?;
    let (input, width) = width(input)?;
    Ok((input, Op::Integer { value, width }))
}

fn parse_load(input: &str) -> IResult<&str, Op<'_>> {
    map(
        preceded(terminated(keyword("load"), space1), value_name),
        Op::Load,
    )(input)
}

fn parse_this_apply(input: &str) -> IResult<&str, Op<'_>> {
    let (input, _) = terminated(keyword("this_apply"), space1)(input)?;
    let (input, callee) = value_name(input)?;
    let (input, arg) = preceded(
        space0,
        delimited(
            terminated(char('('), blank),
            value_name,
            preceded(blank, char(')')),
        ),
    )(input)?;
    Ok((input, Op::ThisApply { callee, arg }))
}

fn parse_tuple(input: &str) -> IResult<&str, Op<'_>> {
    map(
        preceded(terminated(keyword("tuple"), space0), value_list),
        Op::Tuple,
    )(input)
}

fn parse_type_of(input: &str) -> IResult<&str, Op<'_>> {
    map(
        preceded(terminated(keyword("type_of"), space1), parse_type),
        Op::TypeOf,
    )(input)
}

/// `return` takes its value from the same line only
fn parse_return(input: &str) -> IResult<&str, Op<'_>> {
    map(
        preceded(keyword("return"), opt(preceded(space1, value_name))),
        Op::Return,
    )(input)
}

fn parse_br(input: &str) -> IResult<&str, Op<'_>> {
    let (input, _) = terminated(keyword("br"), space1)(input)?;
    let (input, target) = label(input)?;
    let (input, args) = opt(preceded(space0, value_list))(input)?;
    Ok((
        input,
        Op::Br {
            target,
            args: args.unwrap_or_default(),
        },
    ))
}

fn parse_cond_br(input: &str) -> IResult<&str, Op<'_>> {
    let (input, _) = terminated(keyword("cond_br"), space1)(input)?;
    let (input, cond) = terminated(value_name, comma)(input)?;
    let (input, if_true) = terminated(label, comma)(input)?;
    let (input, if_false) = label(input)?;
    Ok((
        input,
        Op::CondBr {
            cond,
            targets: [if_true, if_false],
        },
    ))
}

fn parse_op(input: &str) -> IResult<&str, Op<'_>> {
    alt((
        parse_call,
        parse_decl_ref,
        parse_integer,
        parse_load,
        parse_this_apply,
        parse_tuple,
        parse_type_of,
        parse_return,
        parse_cond_br,
        parse_br,
    ))(input)
}

/// Parse `[%name =] op`
pub(crate) fn parse_statement(input: &str) -> IResult<&str, Stmt<'_>> {
    let rest_len = input.len();
    let (input, result) = opt(terminated(
        value_name,
        tuple((space0, char('='), space0)),
    ))(input)?;
    // A label that happens to spell a keyword (`return:`) is a block header.
    let (input, op) = terminated(parse_op, not(peek(preceded(space0, char(':')))))(input)?;
    Ok((
        input,
        Stmt {
            result,
            op,
            rest_len,
        },
    ))
}

/// Parse a single block parameter: %x: Type
fn parse_block_param(input: &str) -> IResult<&str, (&str, Type)> {
    let (input, name) = terminated(value_name, blank)(input)?;
    let (input, _) = terminated(char(':'), blank)(input)?;
    let (input, ty) = parse_type(input)?;
    Ok((input, (name, ty)))
}

/// Parse block parameters: (%x: Int, %y: Int)
fn parse_block_params(input: &str) -> IResult<&str, Vec<(&str, Type)>> {
    delimited(
        terminated(char('('), blank),
        separated_list0(tuple((blank, char(','), blank)), parse_block_param),
        preceded(blank, char(')')),
    )(input)
}

/// Parse an explicit predecessor list: preds(entry, loop)
fn parse_block_preds(input: &str) -> IResult<&str, Vec<&str>> {
    preceded(
        terminated(keyword("preds"), space0),
        delimited(
            terminated(char('('), blank),
            separated_list0(tuple((blank, char(','), blank)), label),
            preceded(blank, char(')')),
        ),
    )(input)
}

/// Parse a block header and the statements that follow it
pub(crate) fn parse_block(input: &str) -> IResult<&str, BlockAst<'_>> {
    let rest_len = input.len();
    let (input, label) = label(input)?;
    let (input, params) = opt(preceded(space0, parse_block_params))(input)?;
    let (input, preds) = opt(preceded(space1, parse_block_preds))(input)?;
    let (input, _) = preceded(space0, char(':'))(input)?;
    let (input, stmts) = many0(preceded(blank, parse_statement))(input)?;

    Ok((
        input,
        BlockAst {
            label,
            params: params.unwrap_or_default(),
            preds,
            stmts,
            rest_len,
        },
    ))
}

/// Parse `graph { block* }`
pub(crate) fn parse_graph_ast(input: &str) -> IResult<&str, GraphAst<'_>> {
    let (input, _) = terminated(keyword("graph"), blank)(input)?;
    let (input, _) = terminated(char('{'), blank)(input)?;
    let (input, blocks) = many0(terminated(parse_block, blank))(input)?;
    let (input, _) = char('}')(input)?;
    Ok((input, GraphAst { blocks }))
}
