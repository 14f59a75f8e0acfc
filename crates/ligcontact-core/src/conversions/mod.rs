mod mol2;
mod pdb;
