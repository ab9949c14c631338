#![allow(dead_code)]

use enum_retrofit::{HeuristicSet, Marker, Retrofitter};
use std::fs;
use std::path::{Path, PathBuf};

pub fn retrofitter() -> Retrofitter {
    Retrofitter::new(Marker::default(), &HeuristicSet::default()).expect("default retrofitter")
}

pub fn write_source(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dirs");
    }
    fs::write(&path, content).expect("write fixture");
    path
}

/// Non-textual `status` code field, a hand-written `getDesc()` without
/// `@Override`, and the class brace glued to the last method's brace.
pub const MESSAGE_STATUS: &str = r#"package com.luohuo.flex.im.domain.enums;

import java.util.Arrays;
import java.util.Map;
import java.util.function.Function;
import java.util.stream.Collectors;

/**
 * Message status
 */
public enum MessageStatusEnum {
    NORMAL(0, "normal"),
    DELETE(1, "deleted"),
    ;

    private final Integer status;
    private final String desc;
    MessageStatusEnum(Integer status, String desc) {
        this.status = status;
        this.desc = desc;
    }
    public Integer getStatus() {
        return status;
    }
    public String getDesc() {
        return desc;
    }

    private static Map<Integer, MessageStatusEnum> cache;

    static {
        cache = Arrays.stream(MessageStatusEnum.values()).collect(Collectors.toMap(MessageStatusEnum::getStatus, Function.identity()));
    }

    public static MessageStatusEnum of(Integer type) {
        return cache.get(type);
    }}
"#;

/// Tab-indented members, `type` code field and `name` description field.
pub const FEED: &str = "package com.luohuo.flex.im.domain.enums;

import java.util.stream.Stream;

/**
 * Feed content kinds
 */
public enum FeedEnum {

    WORD(0, \"text\"),
\tIMAGE(1, \"image\"),
\tVIDEO(2, \"video\");

\tpublic static FeedEnum match(Integer val) {
\t\treturn Stream.of(values()).filter(item -> item.getType().equals(val)).findAny().orElse(WORD);
\t}

    private final Integer type;
    private final String name;
    FeedEnum(Integer type, String name) {
        this.type = type;
        this.name = name;
    }
    public Integer getType() {
        return type;
    }
    public String getName() {
        return name;
    }}
";

/// Extra whitespace before the opening brace, `value` code field.
pub const USER_TYPE: &str = r#"package com.luohuo.flex.im.enums;

import cn.hutool.core.util.ArrayUtil;

import java.util.Arrays;

public enum UserTypeEnum  {
	SYSTEM(1, "system"),
	BOT(2, "bot"),
	NORMAL(3, "normal");

    /**
     * Type
     */
    private final Integer value;
    /**
     * Type name
     */
    private final String name;
    UserTypeEnum(Integer value, String name) {
        this.value = value;
        this.name = name;
    }
    public Integer getValue() {
        return value;
    }

    public static UserTypeEnum valueOf(Integer value) {
        return ArrayUtil.firstMatch(userType -> userType.getValue().equals(value), UserTypeEnum.values());
    }
}
"#;

/// `@EnumValue` on a field that none of the candidate names would find.
pub const TAGGED: &str = r#"package com.luohuo.flex.im.domain.enums;

import com.baomidou.mybatisplus.annotation.EnumValue;
import com.fasterxml.jackson.annotation.JsonValue;

public enum KeyStatus {

    ACTIVE(1, "active"),
    DISABLED(0, "disabled");

    @EnumValue
    @JsonValue
    private final Integer state;

    private final String description;

    KeyStatus(Integer state, String description) {
        this.state = state;
        this.description = description;
    }

    public String getDescription() {
        return description;
    }
}
"#;

/// Textual code field.
pub const TEXT_CODE: &str = r#"package com.luohuo.flex.im.domain.enums;

public enum OssSceneEnum {
    AVATAR("avatar", "user avatar"),
    CHAT("chat", "chat file");

    private final String code;
    private final String desc;

    OssSceneEnum(String code, String desc) {
        this.code = code;
        this.desc = desc;
    }
}
"#;

/// Already retrofitted by hand, with extra blank lines around the import.
pub const ALREADY_TRANSFORMED: &str = r#"package com.luohuo.flex.im.domain.enums;


import com.luohuo.basic.interfaces.BaseEnum;

/**
 * Blacklist target kinds
 */
public enum BlackTypeEnum implements BaseEnum {
    IP(1),
    UID(2),
    ;

    private final Integer type;
    BlackTypeEnum(Integer type) {
        this.type = type;
    }
    public Integer getType() {
        return type;
    }

    @Override
    public String getCode() {
        return String.valueOf(type);
    }

    @Override
    public String getDesc() {
        return name();
    }
}
"#;

/// Description but no recognizable code field.
pub const NO_CODE_FIELD: &str = r#"package com.luohuo.flex.im.domain.enums;

public enum HotFlagEnum {
    NOT(0, "no"),
    YES(1, "yes");

    private final Integer flag;
    private final String desc;

    HotFlagEnum(Integer flag, String desc) {
        this.flag = flag;
        this.desc = desc;
    }
}
"#;

pub const PLAIN_CLASS: &str = r#"package com.luohuo.flex.im.domain.vo;

public class RoomVO {
    private final String name;
}
"#;

pub const UNTRANSFORMED: [&str; 5] = [MESSAGE_STATUS, FEED, USER_TYPE, TAGGED, TEXT_CODE];
