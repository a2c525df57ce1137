mod farmer;
mod product;
