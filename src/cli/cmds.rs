pub mod add;
pub mod cats;
pub mod edit;
pub mod init;
pub mod plot;
pub mod profile;
pub mod rm;
pub mod root;
pub mod shell;
pub mod sum;
pub mod view;
