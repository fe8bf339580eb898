mod bean;
pub(crate) use bean::Bean;

mod bean_attr;
pub(crate) use bean_attr::BeanAttr;

mod column;
pub(crate) use column::Column;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;
