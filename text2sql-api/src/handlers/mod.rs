pub mod text2sql;
