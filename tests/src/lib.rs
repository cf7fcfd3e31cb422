#![cfg(test)]
mod discovery;
mod parsing;

pub(crate) const HOME_LAN: &str = include_str!("../fixtures/home_lan.txt");
