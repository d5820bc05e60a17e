#[cfg(test)]
pub mod mocks {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use outcome_core::{
        AssociationType, BuildOutcome, BuildOutcomeAssociator, CompareError, CompareResult,
    };

    #[derive(Debug, Clone)]
    enum MockAnswer {
        Nothing,
        Type(AssociationType),
        Fail(String),
    }

    /// 返回固定结果并记录调用次数的关联器
    #[derive(Debug, Clone)]
    pub struct MockAssociator {
        name: String,
        answer: MockAnswer,
        calls: Arc<AtomicUsize>,
    }

    impl MockAssociator {
        pub fn none(name: &str) -> Self {
            Self::with_answer(name, MockAnswer::Nothing)
        }

        pub fn returning(name: &str, association_type: &str) -> Self {
            Self::with_answer(
                name,
                MockAnswer::Type(AssociationType::new(association_type)),
            )
        }

        pub fn failing(name: &str, message: &str) -> Self {
            Self::with_answer(name, MockAnswer::Fail(message.to_string()))
        }

        fn with_answer(name: &str, answer: MockAnswer) -> Self {
            Self {
                name: name.to_string(),
                answer,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// 共享同一个调用计数器的句柄，便于放入组合关联器后继续观察
        pub fn shared(&self) -> Arc<dyn BuildOutcomeAssociator> {
            Arc::new(self.clone())
        }
    }

    impl BuildOutcomeAssociator for MockAssociator {
        fn find_association_type(
            &self,
            _from: &BuildOutcome,
            _to: &BuildOutcome,
        ) -> CompareResult<Option<AssociationType>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.answer {
                MockAnswer::Nothing => Ok(None),
                MockAnswer::Type(t) => Ok(Some(t.clone())),
                MockAnswer::Fail(message) => {
                    Err(CompareError::association(self.name.as_str(), message.as_str()))
                }
            }
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    pub fn outcome(name: &str, outcome_type: &str) -> BuildOutcome {
        BuildOutcome::new(name, outcome_type)
    }
}
