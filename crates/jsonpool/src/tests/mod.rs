mod containers;
mod copy;
mod property;
