mod audit;
mod friendship;
mod organization;
mod user;
mod vacation;
