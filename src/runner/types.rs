use crate::assertion::Tally;
use std::process::ExitCode;

/// 一次运行中的计数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunCounters {
    /// 已求值的断言总数
    pub assertions: usize,

    /// 失败的断言数
    pub failed_assertions: usize,

    /// 已执行的用例数
    pub cases_run: usize,

    /// 发生 panic 的用例数
    pub panicked_cases: usize,

    /// 当前正在执行的用例下标
    pub current: Option<usize>,
}

impl RunCounters {
    /// 合并一个用例的断言计数
    pub fn absorb(&mut self, tally: Tally) {
        self.assertions += tally.assertions;
        self.failed_assertions += tally.failed;
    }
}

/// 运行结束后的摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub counters: RunCounters,

    /// 注册表中的用例总数
    pub total_cases: usize,
}

impl RunSummary {
    pub fn status(&self) -> RunStatus {
        if self.counters.failed_assertions == 0 && self.counters.panicked_cases == 0 {
            RunStatus::Passed
        } else {
            RunStatus::Failed
        }
    }
}

/// 运行结果，对应进程退出码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Passed,
    Failed,
}

impl RunStatus {
    pub fn code(&self) -> u8 {
        match self {
            Self::Passed => 0,
            Self::Failed => 1,
        }
    }
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        ExitCode::from(status.code())
    }
}
