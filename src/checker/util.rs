use crate::token::Tok;
use crate::token::walk::{ast_root, forward};

/// True when the inclusive ranges `a` and `b` spell the same token texts once
/// every token listed in `skip` is ignored on both sides.
pub fn same_tokens(a: (Tok<'_>, Tok<'_>), b: (Tok<'_>, Tok<'_>), skip: &[&str]) -> bool {
    fn texts<'a>((start, end): (Tok<'a>, Tok<'a>), skip: &[&str]) -> Vec<&'a str> {
        forward(Some(start))
            .until(end.next())
            .map(|t| t.str())
            .filter(|text| !skip.contains(text))
            .collect()
    }
    texts(a, skip) == texts(b, skip)
}

/// The declared type range of the variable `tok` is bound to.
pub fn variable_type_range<'a>(tok: Tok<'a>) -> Option<(Tok<'a>, Tok<'a>)> {
    let var = tok.variable()?;
    let list = tok.list();
    Some((list.get(var.type_start?)?, list.get(var.type_end?)?))
}

/// The statement closing the block that ends at `close_brace`, when it is a
/// single `... ;` statement whose leading keyword is one of `branches`
/// (a pattern alternation such as `"break|continue|return"`).
///
/// `break` and `continue` carry no expression and stand for themselves; any
/// other statement is identified by the root of its expression tree, falling
/// back to the token itself for a bare `return ;`.
pub fn last_branch_statement<'a>(close_brace: Tok<'a>, branches: &str) -> Option<Tok<'a>> {
    let stmt = close_brace.at(-2)?;
    if !stmt.matches("%any% ; }").matched() {
        return None;
    }
    let stmt = if stmt.matches("break|continue").matched() {
        stmt
    } else {
        ast_root(Some(stmt)).unwrap_or(stmt)
    };
    stmt.matches(branches).matched().then_some(stmt)
}
