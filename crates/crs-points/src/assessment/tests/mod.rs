mod additional;
mod common;
mod human_capital;
mod spouse;
