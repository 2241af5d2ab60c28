mod auth_form;
mod client;
mod session;
