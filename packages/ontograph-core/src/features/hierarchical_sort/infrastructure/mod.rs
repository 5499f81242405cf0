//! Clustering over a precomputed distance matrix

pub(crate) mod clustering;

pub(crate) use clustering::agglomerate;
