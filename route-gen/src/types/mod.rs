pub mod airline;

pub mod airport;

pub mod flight;

pub mod gen_error;
