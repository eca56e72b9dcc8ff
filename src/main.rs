use clap::Parser;
use prototype_bench::cli::{self, Cli};
use prototype_bench::core::ObjectModelError;

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    if let Err(error) = cli::commands::execute(command) {
        eprintln!("❌ エラー: {error:#}");
        if let Some(model_error) = error.downcast_ref::<ObjectModelError>() {
            let context = model_error.context();
            eprintln!(
                "   重要度: {} / 操作: {}",
                model_error.severity().as_str(),
                context.operation
            );
            if let Some(suggestion) = context.suggestion {
                eprintln!("💡 {suggestion}");
            }
        }
        std::process::exit(1);
    }
}
