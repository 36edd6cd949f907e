// Stateless services used by the shell.

pub mod settings_dialog;
