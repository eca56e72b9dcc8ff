use crate::demonstration::run_demonstrations;
use crate::object_model::ObjectHeap;
use anyhow::Result;
use std::io::Write;

/// 委譲モデルのデモンストレーションを標準出力に書き出す
pub fn execute_demo() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut heap = ObjectHeap::new();

    let result = run_demonstrations(&mut heap, &mut out);
    out.flush()?;
    result
}
