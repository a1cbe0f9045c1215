pub mod normal_vector;
pub mod sphere_grid;
