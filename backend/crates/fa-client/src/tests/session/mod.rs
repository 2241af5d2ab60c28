mod file_token_store;
mod memory_token_store;
mod session_gate;
