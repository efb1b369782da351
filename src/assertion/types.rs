use std::fmt;

/// 断言在源码中的位置以及断言的字面文本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub file: &'static str,
    pub line: u32,
    /// 断言表达式原文，例如 `2 + 2 == 4`
    pub expression: &'static str,
}

impl Site {
    pub const fn new(file: &'static str, line: u32, expression: &'static str) -> Self {
        Self {
            file,
            line,
            expression,
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// 断言谓词种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Equal,    // ==
    NotEqual, // !=
    Greater,  // >
    Less,     // <
    Null,     // is_none
    NotNull,  // is_some
    True,
}

impl Predicate {
    /// 失败信息中的描述短语
    pub fn description(&self) -> &'static str {
        match self {
            Self::Equal => "to equal",
            Self::NotEqual => "to not equal",
            Self::Greater => "to be greater than",
            Self::Less => "to be less than",
            Self::Null => "to be null",
            Self::NotNull => "to not be null",
            Self::True => "to be true",
        }
    }
}

/// 已格式化的操作数
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operands {
    Unary(String),
    Binary(String, String),
}

/// 单次断言的求值结果
#[derive(Debug, Clone)]
pub struct AssertionOutcome {
    pub passed: bool,
    pub site: Site,
    pub predicate: Predicate,
    pub operands: Operands,
}

impl AssertionOutcome {
    /// 期望描述，例如 `4 to equal 5`、`None to not be null`
    pub fn expectation(&self) -> String {
        match &self.operands {
            Operands::Unary(value) => format!("{} {}", value, self.predicate.description()),
            Operands::Binary(lhs, rhs) => {
                format!("{} {} {}", lhs, self.predicate.description(), rhs)
            }
        }
    }
}

/// 失败记录：断言结果加上它所属的套件和用例
#[derive(Debug, Clone, Copy)]
pub struct AssertionFailure<'a> {
    pub suite: &'a str,
    pub case: &'a str,
    pub outcome: &'a AssertionOutcome,
}
