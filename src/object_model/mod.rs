//! 委譲ベースの動的オブジェクトモデル
//!
//! ハンドルで索引されるアリーナに共有委譲先を登録し、参照時に委譲チェーンを解決する。

pub mod function;
pub mod heap;
pub mod inherit;
pub mod value;

pub use function::{empty_init, init, native, ConstructorInit, NativeBody};
pub use heap::{ObjectHeap, MAX_PROTOTYPE_CHAIN_DEPTH};
pub use inherit::{derive_from, derive_with_create, share_prototype};
pub use value::{arg, Value};
