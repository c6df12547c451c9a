// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

#![allow(dead_code)]

pub fn strings(strs: &[&str]) -> Vec<String> {
  strs.iter().map(|s| String::from(*s)).collect()
}

pub const SHA256: &str =
  "e1c4f0ee2b4bd8e3a2d6f0bd4d1f9d8e1c4f0ee2b4bd8e3a2d6f0bd4d1f9d8ea";
