//! Polynomial algebra layer: univariate operations, bivariate grids, secret
//! embedding, and row/column projection (`spec.md` §4.1).

pub mod bivariate;
pub mod univariate;

pub use bivariate::{project_cols, project_rows, BivPoly};
pub use univariate::{
    lagrange_interpolate, scalar_pow, solve_linear_system, vandermonde, UniPoly,
};
