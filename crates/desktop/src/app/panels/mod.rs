mod auth;
mod dashboard;
mod top;
