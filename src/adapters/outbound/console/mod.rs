/// Console adapters for terminal output
mod stdout_presenter;

pub use stdout_presenter::StdoutPresenter;
