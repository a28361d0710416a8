use super::token::Token;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expr<'src> {
    Number {
        value: &'src str,
    },
    Identifier {
        name: &'src str,
    },
    Call {
        name: &'src str,
        arguments: Vec<Expr<'src>>,
    },
    Unary {
        operator: Token<'src>,
        body: Box<Expr<'src>>,
    },
    Binary {
        operator: Token<'src>,
        left: Box<Expr<'src>>,
        right: Box<Expr<'src>>,
    },
}

/// Renders a tree in fully-parenthesized prefix form, e.g. `(+ (- a) b)`.
pub fn print(expr: &Expr) -> String {
    match expr {
        Expr::Number { value } => (*value).to_string(),
        Expr::Identifier { name } => (*name).to_string(),
        Expr::Unary { operator, body } => format!("({} {})", operator.lexeme, print(body)),
        Expr::Binary {
            operator,
            left,
            right,
        } => format!("({} {} {})", operator.lexeme, print(left), print(right)),
        Expr::Call { name, arguments } => {
            let mut parts = vec![(*name).to_string()];
            parts.extend(arguments.iter().map(print));
            format!("({})", parts.join(" "))
        }
    }
}
