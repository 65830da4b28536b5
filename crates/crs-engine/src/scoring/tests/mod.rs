mod common;
mod normalizer;
