use std::fmt;

/// 测试套件：套件名以及每个用例前后执行的钩子
///
/// 通常由 `test_suite!` 生成。没有声明的钩子使用默认的空实现。
pub trait Suite {
    const NAME: &'static str;

    fn before_each() {}

    fn after_each() {}
}

/// 无参数的钩子/用例函数
pub type Hook = Box<dyn Fn()>;

fn noop() {}

/// `test_case!` 在链接期提交的声明
///
/// 必须能在常量上下文中构造，所以只包含 `'static` 字符串和函数指针。
#[derive(Debug, Clone, Copy)]
pub struct TestDeclaration {
    pub name: &'static str,
    pub suite: &'static str,
    pub file: &'static str,
    pub line: u32,
    pub body: fn(),
    pub setup: fn(),
    pub teardown: fn(),
}

impl TestDeclaration {
    /// 在声明处绑定套件名和钩子
    pub const fn new<S: Suite>(
        name: &'static str,
        file: &'static str,
        line: u32,
        body: fn(),
    ) -> Self {
        Self {
            name,
            suite: S::NAME,
            file,
            line,
            body,
            setup: S::before_each,
            teardown: S::after_each,
        }
    }
}

inventory::collect!(TestDeclaration);

/// 已注册的测试用例
pub struct TestCase {
    /// 用例名
    pub name: String,

    /// 所属套件名
    pub suite: String,

    /// 声明位置（file, line），手动注册的用例没有
    pub location: Option<(&'static str, u32)>,

    body: Hook,
    setup: Hook,
    teardown: Hook,
}

impl TestCase {
    /// 创建用例，钩子默认为空操作
    pub fn new(
        name: impl Into<String>,
        suite: impl Into<String>,
        body: impl Fn() + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            suite: suite.into(),
            location: None,
            body: Box::new(body),
            setup: Box::new(noop),
            teardown: Box::new(noop),
        }
    }

    pub fn with_setup(mut self, setup: impl Fn() + 'static) -> Self {
        self.setup = Box::new(setup);
        self
    }

    pub fn with_teardown(mut self, teardown: impl Fn() + 'static) -> Self {
        self.teardown = Box::new(teardown);
        self
    }

    pub fn setup(&self) {
        (self.setup)()
    }

    pub fn run_body(&self) {
        (self.body)()
    }

    pub fn teardown(&self) {
        (self.teardown)()
    }
}

impl From<&TestDeclaration> for TestCase {
    fn from(decl: &TestDeclaration) -> Self {
        let mut case = TestCase::new(decl.name, decl.suite, decl.body)
            .with_setup(decl.setup)
            .with_teardown(decl.teardown);
        case.location = Some((decl.file, decl.line));
        case
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("suite", &self.suite)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}
