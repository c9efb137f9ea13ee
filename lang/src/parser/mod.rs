//! Recursive-descent parser for the Lumen language.
//!
//! Expressions are parsed by precedence climbing over a single operator
//! table. The climb only extends while binding strength strictly rises:
//! an operator at or below the current floor is a fault, not a
//! reassociation, and unknown operator text faults the same way.

pub mod ast;


use crate::error::SyntaxError;
use crate::lexer::{Keyword, Lexer, Token};
use ast::*;

/// Binding strength of a binary operator; `None` for operator text with
/// no binding defined.
fn precedence_of(operator: &str) -> Option<u8> {
    let precedence = match operator {
        "=" => 1,
        "||" => 2,
        "&&" | "in" => 3,
        "<" | ">" | "<=" | ">=" | "==" | "!=" => 7,
        "+" | "-" => 10,
        "*" | "/" | "%" | "**" | "!" => 20,
        _ => return None,
    };
    Some(precedence)
}

/// Parse a complete source unit into its program tree.
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    Parser::new(Lexer::new(source)).parse_program()
}

pub struct Parser {
    input: Lexer,
}

impl Parser {
    pub fn new(input: Lexer) -> Self {
        Self { input }
    }

    pub fn parse_program(&mut self) -> Result<Program, SyntaxError> {
        let mut body = Vec::new();

        while !self.input.is_at_end()? {
            body.push(self.parse_expression()?);
        }

        Ok(Program { body })
    }

    /// Parse one expression or declaration, extending an atom into a call
    /// or a binary chain where the grammar allows it.
    pub fn parse_expression(&mut self) -> Result<Node, SyntaxError> {
        let atom = self.parse_atom()?;

        match atom {
            // Only literals open a binary chain.
            Node::Literal(_) => self.parse_binary(atom, 0),
            Node::Identifier(callee) => {
                if self.is_punctuation('(')? {
                    let args = self.delimited('(', ')', ',', Self::parse_expression)?;
                    Ok(Node::Call { callee, args })
                } else {
                    Ok(Node::Identifier(callee))
                }
            }
            atom => Ok(atom),
        }
    }

    fn parse_atom(&mut self) -> Result<Node, SyntaxError> {
        if self.is_keyword(Keyword::True)? || self.is_keyword(Keyword::False)? {
            return self.parse_boolean();
        }
        if self.is_keyword(Keyword::Fun)? {
            return Ok(Node::Function(self.parse_function()?));
        }
        if self.is_keyword(Keyword::Enum)? {
            return Ok(Node::Enum(self.parse_enum()?));
        }
        if self.is_keyword(Keyword::Class)? {
            return Ok(Node::Class(self.parse_class()?));
        }
        if self.is_keyword(Keyword::Return)? {
            return self.parse_return();
        }
        if self.is_punctuation('{')? {
            return Ok(Node::Block(self.parse_block()?));
        }
        if self.is_keyword(Keyword::Const)? || self.is_keyword(Keyword::Let)? {
            return Ok(Node::Variable(self.parse_variable()?));
        }

        match self.input.next()? {
            Some(Token::Identifier(name)) => Ok(Node::Identifier(Identifier { name })),
            Some(Token::Integer(value)) => Ok(Node::Literal(LiteralValue::Integer(value))),
            Some(Token::Float(value)) => Ok(Node::Literal(LiteralValue::Float(value))),
            Some(Token::String(value)) => Ok(Node::Literal(LiteralValue::String(value))),
            Some(token) => Err(self.error(format!("Could not parse token {:?}", token))),
            None => Err(self.error("Unexpected end of input")),
        }
    }

    fn parse_binary(&mut self, left: Node, min_precedence: u8) -> Result<Node, SyntaxError> {
        if !matches!(self.input.peek()?, Some(Token::Operator(_))) {
            return Ok(left);
        }

        let operator = match self.input.next()? {
            Some(Token::Operator(operator)) => operator,
            _ => {
                return Err(
                    self.error("Could not parse binary expression because operator is not defined")
                )
            }
        };

        match precedence_of(&operator) {
            Some(precedence) if precedence > min_precedence => {
                let atom = self.parse_atom()?;
                let right = self.parse_binary(atom, precedence)?;
                Ok(Node::Binary {
                    left: Box::new(left),
                    operator,
                    right: Box::new(right),
                })
            }
            _ => Err(self.error("Could not parse binary expression")),
        }
    }

    fn parse_boolean(&mut self) -> Result<Node, SyntaxError> {
        let value = matches!(self.input.next()?, Some(Token::Keyword(Keyword::True)));
        Ok(Node::Literal(LiteralValue::Boolean(value)))
    }

    fn parse_return(&mut self) -> Result<Node, SyntaxError> {
        self.expect_keyword(Keyword::Return)?;
        let value = self.parse_expression()?;
        Ok(Node::Return {
            value: Box::new(value),
        })
    }

    fn parse_function(&mut self) -> Result<FunctionDeclaration, SyntaxError> {
        self.expect_keyword(Keyword::Fun)?;
        let id = self.parse_identifier()?;
        let params = self.delimited('(', ')', ',', Self::parse_function_parameter)?;

        let return_type = if self.is_punctuation(':')? {
            self.expect_punctuation(':')?;
            Some(self.parse_type()?)
        } else {
            None
        };

        let body = self.parse_block()?;

        Ok(FunctionDeclaration {
            id,
            params,
            body,
            return_type,
        })
    }

    fn parse_function_parameter(&mut self) -> Result<FunctionParameter, SyntaxError> {
        let id = self.parse_identifier()?;

        let ty = if self.is_punctuation(':')? {
            self.expect_punctuation(':')?;
            Some(self.parse_type()?)
        } else {
            None
        };

        Ok(FunctionParameter { id, ty })
    }

    // Only named types have surface syntax; union types exist in the tree
    // for consumers but cannot be written.
    fn parse_type(&mut self) -> Result<TypeDeclaration, SyntaxError> {
        let id = self.parse_identifier()?;
        Ok(TypeDeclaration {
            ty: TypeExpr::Identifier(id),
        })
    }

    fn parse_variable(&mut self) -> Result<VariableDeclaration, SyntaxError> {
        let head = self.parse_identifier()?;
        let id = self.parse_identifier()?;
        self.expect_operator("=")?;
        let value = self.parse_expression()?;

        // The head is validated only after the value has been consumed.
        let kind = match head.name.as_str() {
            "const" => VariableKind::Const,
            "let" => VariableKind::Let,
            _ => return Err(self.error("Could not parse variable")),
        };

        Ok(VariableDeclaration {
            kind,
            id,
            value: Box::new(value),
        })
    }

    fn parse_enum(&mut self) -> Result<EnumDeclaration, SyntaxError> {
        self.expect_keyword(Keyword::Enum)?;
        let id = self.parse_identifier()?;
        let members = self.delimited('{', '}', ',', Self::parse_enum_member)?;
        Ok(EnumDeclaration { id, members })
    }

    fn parse_enum_member(&mut self) -> Result<EnumMember, SyntaxError> {
        let id = self.parse_identifier()?;

        if self.is_operator("=")? {
            self.input.next()?;
            let value = match self.input.next()? {
                Some(Token::String(value)) => LiteralValue::String(value),
                Some(Token::Integer(value)) => LiteralValue::Integer(value),
                Some(Token::Float(value)) => LiteralValue::Float(value),
                Some(Token::Keyword(Keyword::True)) => LiteralValue::Boolean(true),
                Some(Token::Keyword(Keyword::False)) => LiteralValue::Boolean(false),
                _ => return Err(self.error("Expecting a literal")),
            };
            return Ok(EnumMember {
                id,
                value: Some(value),
            });
        }

        Ok(EnumMember { id, value: None })
    }

    fn parse_class(&mut self) -> Result<ClassDeclaration, SyntaxError> {
        self.expect_keyword(Keyword::Class)?;
        let id = self.parse_identifier()?;

        // TODO: lower constructor parameters into class members; the
        // clause is currently consumed and discarded.
        if self.is_punctuation('(')? {
            self.delimited('(', ')', ',', |_| Ok(()))?;
        }

        Ok(ClassDeclaration {
            id,
            access: AccessModifier::Private,
            members: Vec::new(),
        })
    }

    fn parse_block(&mut self) -> Result<BlockStatement, SyntaxError> {
        self.expect_punctuation('{')?;

        let mut body = Vec::new();
        while !self.input.is_at_end()? && !self.is_punctuation('}')? {
            body.push(self.parse_expression()?);
        }

        self.expect_punctuation('}')?;
        Ok(BlockStatement { body })
    }

    // Keywords are acceptable identifiers, e.g. as variable heads.
    fn parse_identifier(&mut self) -> Result<Identifier, SyntaxError> {
        match self.input.next()? {
            Some(Token::Identifier(name)) => Ok(Identifier { name }),
            Some(Token::Keyword(keyword)) => Ok(Identifier {
                name: keyword.as_str().to_string(),
            }),
            _ => Err(self.error("Expecting an identifier")),
        }
    }

    /// Parse `start item (separator item)* stop`. There is no tolerance
    /// for a trailing separator: a separator commits the list to another
    /// item.
    fn delimited<T>(
        &mut self,
        start: char,
        stop: char,
        separator: char,
        parse_item: fn(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<Vec<T>, SyntaxError> {
        let mut items = Vec::new();
        let mut first = true;

        self.expect_punctuation(start)?;
        while !self.input.is_at_end()? {
            if self.is_punctuation(stop)? {
                break;
            }
            if first {
                first = false;
            } else {
                self.expect_punctuation(separator)?;
            }
            items.push(parse_item(self)?);
        }
        self.expect_punctuation(stop)?;

        Ok(items)
    }

    fn is_punctuation(&mut self, ch: char) -> Result<bool, SyntaxError> {
        Ok(matches!(self.input.peek()?, Some(Token::Punctuation(found)) if *found == ch))
    }

    fn is_keyword(&mut self, keyword: Keyword) -> Result<bool, SyntaxError> {
        Ok(matches!(self.input.peek()?, Some(Token::Keyword(found)) if *found == keyword))
    }

    fn is_operator(&mut self, operator: &str) -> Result<bool, SyntaxError> {
        Ok(matches!(self.input.peek()?, Some(Token::Operator(found)) if found.as_str() == operator))
    }

    fn expect_punctuation(&mut self, ch: char) -> Result<(), SyntaxError> {
        if self.is_punctuation(ch)? {
            self.input.next()?;
            return Ok(());
        }
        Err(self.error(format!("Expecting punctuation: \"{}\"", ch)))
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), SyntaxError> {
        if self.is_keyword(keyword)? {
            self.input.next()?;
            return Ok(());
        }
        Err(self.error(format!("Expecting keyword: \"{}\"", keyword.as_str())))
    }

    fn expect_operator(&mut self, operator: &str) -> Result<(), SyntaxError> {
        if self.is_operator(operator)? {
            self.input.next()?;
            return Ok(());
        }
        Err(self.error(format!("Expecting operator: \"{}\"", operator)))
    }

    fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, self.input.position())
    }
}
