use crate::registry::types::{TestCase, TestDeclaration};
use crate::{AttounitError, Result};
use tracing::debug;

/// 有容量上限、只追加的用例列表
///
/// 迭代顺序就是注册顺序。
#[derive(Debug)]
pub struct TestRegistry {
    cases: Vec<TestCase>,
    capacity: usize,
}

impl TestRegistry {
    /// 默认容量
    pub const DEFAULT_CAPACITY: usize = 2048;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cases: Vec::new(),
            capacity,
        }
    }

    /// 收集所有通过 `test_case!` 声明的用例
    ///
    /// 按 (文件, 行号) 稳定排序：同一文件内按声明顺序，不同文件按路径顺序。
    /// 同一行上的多个声明（例如由一个宏展开出来的）保持提交顺序。
    /// 超出容量时返回 `RegistryOverflow`，此时还没有任何用例被执行。
    pub fn collect(capacity: usize) -> Result<Self> {
        let mut declarations: Vec<&TestDeclaration> =
            inventory::iter::<TestDeclaration>.into_iter().collect();
        // inventory 每次提交都插到链表头部，反转后才是提交顺序
        declarations.reverse();
        declarations.sort_by(|a, b| (a.file, a.line).cmp(&(b.file, b.line)));

        let mut registry = Self::with_capacity(capacity);
        for decl in declarations {
            registry.register(TestCase::from(decl))?;
        }

        debug!(
            "Collected {} declared test cases (capacity {})",
            registry.len(),
            capacity
        );
        Ok(registry)
    }

    /// 注册一个用例
    pub fn register(&mut self, case: TestCase) -> Result<()> {
        if self.cases.len() >= self.capacity {
            return Err(AttounitError::RegistryOverflow {
                capacity: self.capacity,
                suite: case.suite,
                name: case.name,
            });
        }

        debug!("Registered test case {}::{}", case.suite, case.name);
        self.cases.push(case);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl Default for TestRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(name: &str) -> TestCase {
        TestCase::new(name, "suite", || {})
    }

    #[test]
    fn test_register_keeps_order() {
        let mut registry = TestRegistry::new();
        registry.register(case("first")).unwrap();
        registry.register(case("second")).unwrap();
        registry.register(case("third")).unwrap();

        let names: Vec<&str> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_register_past_capacity() {
        let mut registry = TestRegistry::with_capacity(1);
        registry.register(case("fits")).unwrap();

        let err = registry.register(case("overflows")).unwrap_err();
        match err {
            AttounitError::RegistryOverflow {
                capacity,
                suite,
                name,
            } => {
                assert_eq!(capacity, 1);
                assert_eq!(suite, "suite");
                assert_eq!(name, "overflows");
            }
            other => panic!("Expected RegistryOverflow, got {:?}", other),
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_zero_capacity() {
        let mut registry = TestRegistry::with_capacity(0);
        assert!(registry.register(case("nope")).is_err());
        assert!(registry.is_empty());
    }
}
