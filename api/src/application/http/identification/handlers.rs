pub mod identify_food;
