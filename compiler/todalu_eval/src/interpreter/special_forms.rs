//! Special forms: list heads with their own evaluation rules.
//!
//! Each form checks its operand count before evaluating anything. Special
//! form names cannot be rebound: `(def car ...)` creates a binding that a
//! list head `car` never consults.

use std::fmt;

use todalu_ir::{Lambda, Node, NodeKind, Params};
use todalu_parse::{read_one, ParseError};

use super::arithmetic::{numeric_eq, numeric_gt, ArithOp, Number};
use super::Interpreter;
use crate::errors::{
    empty_list, exit_requested, io_error, syntax_error, type_error, wrong_operand_count,
    EvalError, EvalResult,
};

/// Operand count accepted by a special form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, n) = match self {
            Arity::Exactly(0) => return f.write_str("no operands"),
            Arity::Exactly(n) => ("", n),
            Arity::AtLeast(n) => ("at least ", n),
        };
        let noun = if *n == 1 { "operand" } else { "operands" };
        write!(f, "{prefix}{n} {noun}")
    }
}

/// Every special form the evaluator knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialForm {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Gt,
    IsList,
    IsInt,
    IsDec,
    IsBool,
    IsString,
    Progn,
    Print,
    Println,
    Quote,
    Eval,
    Exit,
    Read,
    ReadStr,
    Car,
    Cdr,
    Cons,
    Lambda,
    Def,
    If,
}

impl SpecialForm {
    pub const ALL: [SpecialForm; 25] = [
        SpecialForm::Add,
        SpecialForm::Sub,
        SpecialForm::Mul,
        SpecialForm::Div,
        SpecialForm::Eq,
        SpecialForm::Gt,
        SpecialForm::IsList,
        SpecialForm::IsInt,
        SpecialForm::IsDec,
        SpecialForm::IsBool,
        SpecialForm::IsString,
        SpecialForm::Progn,
        SpecialForm::Print,
        SpecialForm::Println,
        SpecialForm::Quote,
        SpecialForm::Eval,
        SpecialForm::Exit,
        SpecialForm::Read,
        SpecialForm::ReadStr,
        SpecialForm::Car,
        SpecialForm::Cdr,
        SpecialForm::Cons,
        SpecialForm::Lambda,
        SpecialForm::Def,
        SpecialForm::If,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        let form = match name {
            "+" => SpecialForm::Add,
            "-" => SpecialForm::Sub,
            "*" => SpecialForm::Mul,
            "/" => SpecialForm::Div,
            "eq?" => SpecialForm::Eq,
            ">" => SpecialForm::Gt,
            "list?" => SpecialForm::IsList,
            "int?" => SpecialForm::IsInt,
            "dec?" => SpecialForm::IsDec,
            "bool?" => SpecialForm::IsBool,
            "string?" => SpecialForm::IsString,
            "progn" => SpecialForm::Progn,
            "print" => SpecialForm::Print,
            "println" => SpecialForm::Println,
            "quote" => SpecialForm::Quote,
            "eval" => SpecialForm::Eval,
            "exit" => SpecialForm::Exit,
            "read" => SpecialForm::Read,
            "readstr" => SpecialForm::ReadStr,
            "car" => SpecialForm::Car,
            "cdr" => SpecialForm::Cdr,
            "cons" => SpecialForm::Cons,
            "lambda" => SpecialForm::Lambda,
            "def" => SpecialForm::Def,
            "if" => SpecialForm::If,
            _ => return None,
        };
        Some(form)
    }

    pub fn name(self) -> &'static str {
        match self {
            SpecialForm::Add => "+",
            SpecialForm::Sub => "-",
            SpecialForm::Mul => "*",
            SpecialForm::Div => "/",
            SpecialForm::Eq => "eq?",
            SpecialForm::Gt => ">",
            SpecialForm::IsList => "list?",
            SpecialForm::IsInt => "int?",
            SpecialForm::IsDec => "dec?",
            SpecialForm::IsBool => "bool?",
            SpecialForm::IsString => "string?",
            SpecialForm::Progn => "progn",
            SpecialForm::Print => "print",
            SpecialForm::Println => "println",
            SpecialForm::Quote => "quote",
            SpecialForm::Eval => "eval",
            SpecialForm::Exit => "exit",
            SpecialForm::Read => "read",
            SpecialForm::ReadStr => "readstr",
            SpecialForm::Car => "car",
            SpecialForm::Cdr => "cdr",
            SpecialForm::Cons => "cons",
            SpecialForm::Lambda => "lambda",
            SpecialForm::Def => "def",
            SpecialForm::If => "if",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            SpecialForm::Add | SpecialForm::Sub | SpecialForm::Mul | SpecialForm::Div => {
                Arity::AtLeast(2)
            }
            SpecialForm::Progn => Arity::AtLeast(1),
            SpecialForm::Read | SpecialForm::ReadStr => Arity::Exactly(0),
            SpecialForm::IsList
            | SpecialForm::IsInt
            | SpecialForm::IsDec
            | SpecialForm::IsBool
            | SpecialForm::IsString
            | SpecialForm::Print
            | SpecialForm::Println
            | SpecialForm::Quote
            | SpecialForm::Eval
            | SpecialForm::Exit
            | SpecialForm::Car
            | SpecialForm::Cdr => Arity::Exactly(1),
            SpecialForm::Eq
            | SpecialForm::Gt
            | SpecialForm::Cons
            | SpecialForm::Lambda
            | SpecialForm::Def => Arity::Exactly(2),
            SpecialForm::If => Arity::Exactly(3),
        }
    }
}

impl Interpreter {
    /// Evaluate the special form `form` applied to the unevaluated `args`.
    pub(super) fn eval_special(&mut self, form: SpecialForm, args: &[Node]) -> EvalResult {
        let arity = form.arity();
        if !arity.accepts(args.len()) {
            return Err(wrong_operand_count(
                form.name(),
                &arity.to_string(),
                args.len(),
            ));
        }

        match form {
            SpecialForm::Add => self.eval_arithmetic(ArithOp::Add, args),
            SpecialForm::Sub => self.eval_arithmetic(ArithOp::Sub, args),
            SpecialForm::Mul => self.eval_arithmetic(ArithOp::Mul, args),
            SpecialForm::Div => self.eval_arithmetic(ArithOp::Div, args),
            SpecialForm::Eq => {
                let (lhs, rhs) = self.eval_pair(args)?;
                Ok(Node::Bool(numeric_eq(&lhs, &rhs)))
            }
            SpecialForm::Gt => {
                let (lhs, rhs) = self.eval_pair(args)?;
                Ok(Node::Bool(numeric_gt(&lhs, &rhs)))
            }
            SpecialForm::IsList => self.eval_kind_test(&args[0], NodeKind::List),
            SpecialForm::IsInt => self.eval_kind_test(&args[0], NodeKind::Integer),
            SpecialForm::IsDec => self.eval_kind_test(&args[0], NodeKind::Decimal),
            SpecialForm::IsBool => self.eval_kind_test(&args[0], NodeKind::Bool),
            SpecialForm::IsString => self.eval_kind_test(&args[0], NodeKind::Str),
            SpecialForm::Progn => self.eval_progn(args),
            SpecialForm::Print => self.eval_print(&args[0], false),
            SpecialForm::Println => self.eval_print(&args[0], true),
            SpecialForm::Quote => Ok(args[0].clone()),
            SpecialForm::Eval => {
                let code = self.eval(&args[0])?;
                self.eval(&code)
            }
            SpecialForm::Exit => self.eval_exit(&args[0]),
            SpecialForm::Read => self.eval_read(),
            SpecialForm::ReadStr => {
                let line = self.read_input_line(form.name())?;
                Ok(Node::Str(line))
            }
            SpecialForm::Car => self.eval_car(&args[0]),
            SpecialForm::Cdr => self.eval_cdr(&args[0]),
            SpecialForm::Cons => self.eval_cons(&args[0], &args[1]),
            SpecialForm::Lambda => eval_lambda(&args[0], &args[1]),
            SpecialForm::Def => self.eval_def(&args[0], &args[1]),
            SpecialForm::If => {
                if self.eval(&args[0])?.truthy() {
                    self.eval(&args[1])
                } else {
                    self.eval(&args[2])
                }
            }
        }
    }

    fn eval_pair(&mut self, args: &[Node]) -> Result<(Node, Node), EvalError> {
        let lhs = self.eval(&args[0])?;
        let rhs = self.eval(&args[1])?;
        Ok((lhs, rhs))
    }

    fn eval_arithmetic(&mut self, op: ArithOp, args: &[Node]) -> EvalResult {
        let mut operands = Vec::with_capacity(args.len());
        for arg in args {
            let value = self.eval(arg)?;
            let number = Number::from_node(&value)
                .ok_or_else(|| type_error(op.symbol(), "numeric operands", value.kind()))?;
            operands.push(number);
        }
        op.fold(&operands)
    }

    fn eval_kind_test(&mut self, operand: &Node, kind: NodeKind) -> EvalResult {
        let value = self.eval(operand)?;
        Ok(Node::Bool(value.kind() == kind))
    }

    fn eval_progn(&mut self, body: &[Node]) -> EvalResult {
        let mut last = None;
        for form in body {
            last = Some(self.eval(form)?);
        }
        Ok(last.unwrap_or_else(Node::nil))
    }

    /// Strings print raw, everything else prints its repr. Returns the value.
    fn eval_print(&mut self, operand: &Node, newline: bool) -> EvalResult {
        let value = self.eval(operand)?;
        let repr;
        let text = match &value {
            Node::Str(text) => text.as_str(),
            other => {
                repr = other.repr();
                repr.as_str()
            }
        };
        if newline {
            self.print_handler.println(text);
        } else {
            self.print_handler.print(text);
        }
        Ok(value)
    }

    fn eval_exit(&mut self, operand: &Node) -> EvalResult {
        match self.eval(operand)? {
            Node::Integer(code) => {
                tracing::debug!(code, "exit requested");
                Err(exit_requested(code))
            }
            other => Err(type_error("exit", "an integer", other.kind())),
        }
    }

    fn read_input_line(&self, form: &str) -> Result<String, EvalError> {
        match self.input_handler.read_line() {
            Ok(Some(line)) => Ok(line),
            Ok(None) => Err(ParseError::UnexpectedEof.into()),
            Err(err) => Err(io_error(form, &err)),
        }
    }

    /// One line of input, read as exactly one unevaluated form.
    fn eval_read(&mut self) -> EvalResult {
        let line = self.read_input_line("read")?;
        read_one(&line)?.ok_or_else(|| syntax_error("`read` got a line with no form"))
    }

    fn eval_list_operand(&mut self, form: &str, operand: &Node) -> Result<Vec<Node>, EvalError> {
        match self.eval(operand)? {
            Node::List(items) => Ok(items),
            other => Err(type_error(form, "a list", other.kind())),
        }
    }

    fn eval_car(&mut self, operand: &Node) -> EvalResult {
        let items = self.eval_list_operand("car", operand)?;
        items.into_iter().next().ok_or_else(|| empty_list("car"))
    }

    /// Drops the head of the freshly evaluated list in place.
    fn eval_cdr(&mut self, operand: &Node) -> EvalResult {
        let mut items = self.eval_list_operand("cdr", operand)?;
        if items.is_empty() {
            return Err(empty_list("cdr"));
        }
        items.remove(0);
        Ok(Node::List(items))
    }

    /// Prepends to the freshly evaluated list in place.
    fn eval_cons(&mut self, head: &Node, tail: &Node) -> EvalResult {
        let head = self.eval(head)?;
        let mut items = self.eval_list_operand("cons", tail)?;
        items.insert(0, head);
        Ok(Node::List(items))
    }

    /// `(def name value)`: `name` is used as-is when it is a symbol,
    /// otherwise it is evaluated and must produce one.
    fn eval_def(&mut self, target: &Node, value: &Node) -> EvalResult {
        let name = match target {
            Node::Symbol(name) => name.clone(),
            other => match self.eval(other)? {
                Node::Symbol(name) => name,
                evaluated => {
                    return Err(syntax_error(format!(
                        "`def` expects a symbol name, got {}",
                        evaluated.kind()
                    )))
                }
            },
        };
        let value = self.eval(value)?;
        tracing::debug!(name = %name, kind = %value.kind(), "def");
        self.env.define(name, value.clone());
        Ok(value)
    }
}

/// `(lambda params body)`: validates `params`, keeps `body` unevaluated.
fn eval_lambda(params: &Node, body: &Node) -> EvalResult {
    let params =
        Params::from_node(params).map_err(|err| syntax_error(format!("`lambda`: {err}")))?;
    Ok(Node::Lambda(Box::new(Lambda::new(params, body.clone()))))
}
