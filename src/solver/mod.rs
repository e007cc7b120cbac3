pub mod route_opt;
