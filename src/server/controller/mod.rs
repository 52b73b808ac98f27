pub mod admin;
pub mod auth;
pub mod customer;
pub mod health;
pub mod otp;
pub mod password;
pub mod user;

#[cfg(test)]
mod test;
