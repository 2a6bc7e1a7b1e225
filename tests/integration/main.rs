mod command;
mod pagination;
