//! 单元测试模块
//! 覆盖节点模型、树工厂、声明式树等功能

pub mod factory_tests;
