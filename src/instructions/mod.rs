// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

mod from;
pub use from::*;

mod user;
pub use user::*;
