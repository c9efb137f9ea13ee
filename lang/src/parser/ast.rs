/// Abstract syntax tree node types for Lumen programs.
///
/// Nodes hold only their semantic children; positions and trivia are not
/// recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program(Program),

    // Expressions
    Binary {
        left: Box<Node>,
        operator: String,
        right: Box<Node>,
    },
    /// Not produced by the current grammar; `||` and `&&` parse as
    /// [`Node::Binary`].
    Logical {
        left: Box<Node>,
        operator: String,
        right: Box<Node>,
    },
    Literal(LiteralValue),
    Identifier(Identifier),
    Call {
        callee: Identifier,
        args: Vec<Node>,
    },

    // Declarations & statements
    Function(FunctionDeclaration),
    Block(BlockStatement),
    Return {
        value: Box<Node>,
    },
    Variable(VariableDeclaration),
    Enum(EnumDeclaration),
    Class(ClassDeclaration),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub id: Identifier,
    pub params: Vec<FunctionParameter>,
    pub body: BlockStatement,
    pub return_type: Option<TypeDeclaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParameter {
    pub id: Identifier,
    pub ty: Option<TypeDeclaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub ty: TypeExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    Identifier(Identifier),
    Union(UnionType),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub types: Vec<Identifier>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Const,
    Let,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub id: Identifier,
    pub value: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDeclaration {
    pub id: Identifier,
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub id: Identifier,
    pub value: Option<LiteralValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessModifier {
    Public,
    Private,
    Protected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclaration {
    pub id: Identifier,
    pub access: AccessModifier,
    pub members: Vec<ClassMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassMember {
    pub id: Identifier,
}

/// Root node: the ordered top-level nodes of one source unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    /// Top-level variable declarations, in source order.
    pub fn variables(&self) -> Vec<&VariableDeclaration> {
        self.body
            .iter()
            .filter_map(|node| match node {
                Node::Variable(declaration) => Some(declaration),
                _ => None,
            })
            .collect()
    }

    /// Top-level function declarations, in source order. Functions bound
    /// through a variable declaration do not count.
    pub fn functions(&self) -> Vec<&FunctionDeclaration> {
        self.body
            .iter()
            .filter_map(|node| match node {
                Node::Function(declaration) => Some(declaration),
                _ => None,
            })
            .collect()
    }

    pub fn get_variable(&self, name: &str) -> Option<&VariableDeclaration> {
        self.body.iter().find_map(|node| match node {
            Node::Variable(declaration) if declaration.id.name == name => Some(declaration),
            _ => None,
        })
    }

    pub fn get_function(&self, name: &str) -> Option<&FunctionDeclaration> {
        self.body.iter().find_map(|node| match node {
            Node::Function(declaration) if declaration.id.name == name => Some(declaration),
            _ => None,
        })
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.get_function(name).is_some()
    }
}
