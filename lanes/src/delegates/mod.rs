mod group;
mod lane;
