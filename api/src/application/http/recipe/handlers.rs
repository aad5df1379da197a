pub mod parse_recipe;
