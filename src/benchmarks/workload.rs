// ラベル付きワークロード
// ベンチマークランナーが消費する「説明 + 引数なしの処理」の組

use crate::core::FullName;
use crate::records::{full_name, ClosurePerson, DelegatedPerson, PersonPrototype, PlainPerson};
use std::fmt;
use std::hint::black_box;

pub const FULL_NAME: &str = "Full name";
pub const NO_FULL_NAME: &str = "No full name";
pub const PROTO_FULL_NAME: &str = "Proto full name";

/// 説明と処理の組。ランナーに一度だけ消費される
pub struct LabeledWorkload {
    pub description: String,
    pub unit: Box<dyn FnMut()>,
}

impl LabeledWorkload {
    pub fn new(description: impl Into<String>, unit: impl FnMut() + 'static) -> Self {
        Self {
            description: description.into(),
            unit: Box::new(unit),
        }
    }
}

impl fmt::Debug for LabeledWorkload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabeledWorkload")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// 3種類のレコードそれぞれについて、構築して fullName を呼ぶワークロード
pub fn standard_workloads() -> Vec<LabeledWorkload> {
    let prototype = PersonPrototype::new();

    vec![
        LabeledWorkload::new(FULL_NAME, || {
            let p = ClosurePerson::new("Sander", "Rossel");
            black_box(p.full_name().ok());
        }),
        LabeledWorkload::new(NO_FULL_NAME, || {
            let p = PlainPerson::new("Sander", "Rossel");
            black_box(full_name(&p));
        }),
        LabeledWorkload::new(PROTO_FULL_NAME, move || {
            let p = DelegatedPerson::new(&prototype, "Sander", "Rossel");
            black_box(p.full_name().ok());
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_workload_labels() {
        let labels: Vec<String> = standard_workloads()
            .into_iter()
            .map(|workload| workload.description)
            .collect();
        assert_eq!(labels, vec![FULL_NAME, NO_FULL_NAME, PROTO_FULL_NAME]);
    }

    #[test]
    fn test_workloads_are_callable() {
        for mut workload in standard_workloads() {
            (workload.unit)();
            (workload.unit)();
        }
    }

    #[test]
    fn test_debug_omits_closure() {
        let workload = LabeledWorkload::new("x", || {});
        assert!(format!("{workload:?}").contains("\"x\""));
    }
}
