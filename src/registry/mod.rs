/// 用例注册表与套件绑定
mod store;
mod types;

pub use store::TestRegistry;
pub use types::{Hook, Suite, TestCase, TestDeclaration};
