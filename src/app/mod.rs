// Модуль графического приложения - объединяет состояние, UI и обработку ввода
pub mod input;
pub mod state;
pub mod ui;

// Реэкспортируем основные типы для удобства использования
pub use state::{DemoMode, FiguresApp};
