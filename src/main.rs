use phonebook::cli;
use phonebook::errors::AppError;

fn main() -> Result<(), AppError> {
    cli::run_app()
}
