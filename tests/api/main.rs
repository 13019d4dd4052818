mod helpers;
mod lifecycle;
mod login;
mod root;
mod upload;
