// trait definitions of cli options

use super::InputOptions;

pub trait CliCommon {
    fn verbose(&self) -> bool;
}

pub trait CliInput: CliCommon {
    fn input(&self) -> &InputOptions;
}
