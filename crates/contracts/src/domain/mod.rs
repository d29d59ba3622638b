pub mod a001_inventory;
