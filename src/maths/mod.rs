pub mod msun;
