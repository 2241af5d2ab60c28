mod jwt;
mod password;
