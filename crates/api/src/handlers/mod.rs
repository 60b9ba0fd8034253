pub mod orphanage;
