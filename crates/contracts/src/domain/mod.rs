pub mod a001_learning_path;
