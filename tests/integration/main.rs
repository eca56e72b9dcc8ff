// 統合テストのエントリーポイント

mod test_benchmark;
mod test_delegation;
mod test_main_entry_point;
