//! Hardware event codes per trace unit kind.
//!
//! Codes follow the AIE-ML event ID listing. Codes missing from a table are
//! reserved or not traceable and resolve to "Unknown".

pub const CORE_EVENTS: &[(u8, &str)] = &[
    (0, "NONE"),
    (1, "TRUE"),
    (2, "GROUP_0"),
    (3, "TIMER_SYNC"),
    (4, "TIMER_VALUE_REACHED"),
    (5, "PERF_CNT_0"),
    (6, "PERF_CNT_1"),
    (7, "PERF_CNT_2"),
    (8, "PERF_CNT_3"),
    (9, "COMBO_EVENT_0"),
    (10, "COMBO_EVENT_1"),
    (11, "COMBO_EVENT_2"),
    (12, "COMBO_EVENT_3"),
    (13, "EDGE_DETECTION_EVENT_0"),
    (14, "EDGE_DETECTION_EVENT_1"),
    (15, "GROUP_PC_EVENT"),
    (16, "PC_0"),
    (17, "PC_1"),
    (18, "PC_2"),
    (19, "PC_3"),
    (20, "PC_RANGE_0_1"),
    (21, "PC_RANGE_2_3"),
    (22, "GROUP_STALL"),
    (23, "MEMORY_STALL"),
    (24, "STREAM_STALL"),
    (25, "CASCADE_STALL"),
    (26, "LOCK_STALL"),
    (27, "DEBUG_HALTED"),
    (28, "ACTIVE"),
    (29, "DISABLED"),
    (30, "ECC_ERROR_STALL"),
    (31, "ECC_SCRUBBING_STALL"),
    (32, "GROUP_PROGRAM_FLOW"),
    (33, "INSTR_EVENT_0"),
    (34, "INSTR_EVENT_1"),
    (35, "INSTR_CALL"),
    (36, "INSTR_RETURN"),
    (37, "INSTR_VECTOR"),
    (38, "INSTR_LOAD"),
    (39, "INSTR_STORE"),
    (40, "INSTR_STREAM_GET"),
    (41, "INSTR_STREAM_PUT"),
    (42, "INSTR_CASCADE_GET"),
    (43, "INSTR_CASCADE_PUT"),
    (44, "INSTR_LOCK_ACQUIRE_REQ"),
    (45, "INSTR_LOCK_RELEASE_REQ"),
    (46, "GROUP_ERRORS_0"),
    (47, "GROUP_ERRORS_1"),
    (48, "SRS_OVERFLOW"),
    (49, "UPS_OVERFLOW"),
    (50, "FP_HUGE"),
    (51, "INT_FP_0"),
    (52, "FP_INVALID"),
    (53, "FP_INF"),
    (55, "PM_REG_ACCESS_FAILURE"),
    (56, "STREAM_PKT_PARITY_ERROR"),
    (57, "CONTROL_PKT_ERROR"),
    (58, "AXI_MM_SLAVE_ERROR"),
    (59, "INSTR_DECOMPRESSION_ERROR"),
    (60, "DM_ADDRESS_OUT_OF_RANGE"),
    (61, "PM_ECC_ERROR_SCRUB_CORRECTED"),
    (62, "PM_ECC_ERROR_SCRUB_2BIT"),
    (63, "PM_ECC_ERROR_1BIT"),
    (64, "PM_ECC_ERROR_2BIT"),
    (65, "PM_ADDRESS_OUT_OF_RANGE"),
    (66, "DM_ACCESS_TO_UNAVAILABLE"),
    (67, "LOCK_ACCESS_TO_UNAVAILABLE"),
    (68, "INSTR_WARNING"),
    (69, "INSTR_ERROR"),
    (70, "DECOMPRESSION_UNDERFLOW"),
    (71, "STREAM_SWITCH_PORT_PARITY_ERROR"),
    (72, "PROCESSOR_BUS_ERROR"),
    (73, "GROUP_STREAM_SWITCH"),
    (74, "PORT_IDLE_0"),
    (75, "PORT_RUNNING_0"),
    (76, "PORT_STALLED_0"),
    (77, "PORT_TLAST_0"),
    (78, "PORT_IDLE_1"),
    (79, "PORT_RUNNING_1"),
    (80, "PORT_STALLED_1"),
    (81, "PORT_TLAST_1"),
    (82, "PORT_IDLE_2"),
    (83, "PORT_RUNNING_2"),
    (84, "PORT_STALLED_2"),
    (85, "PORT_TLAST_2"),
    (86, "PORT_IDLE_3"),
    (87, "PORT_RUNNING_3"),
    (88, "PORT_STALLED_3"),
    (89, "PORT_TLAST_3"),
    (90, "PORT_IDLE_4"),
    (91, "PORT_RUNNING_4"),
    (92, "PORT_STALLED_4"),
    (93, "PORT_TLAST_4"),
    (94, "PORT_IDLE_5"),
    (95, "PORT_RUNNING_5"),
    (96, "PORT_STALLED_5"),
    (97, "PORT_TLAST_5"),
    (98, "PORT_IDLE_6"),
    (99, "PORT_RUNNING_6"),
    (100, "PORT_STALLED_6"),
    (101, "PORT_TLAST_6"),
    (102, "PORT_IDLE_7"),
    (103, "PORT_RUNNING_7"),
    (104, "PORT_STALLED_7"),
    (105, "PORT_TLAST_7"),
    (106, "GROUP_BROADCAST"),
    (107, "BROADCAST_0"),
    (108, "BROADCAST_1"),
    (109, "BROADCAST_2"),
    (110, "BROADCAST_3"),
    (111, "BROADCAST_4"),
    (112, "BROADCAST_5"),
    (113, "BROADCAST_6"),
    (114, "BROADCAST_7"),
    (115, "BROADCAST_8"),
    (116, "BROADCAST_9"),
    (117, "BROADCAST_10"),
    (118, "BROADCAST_11"),
    (119, "BROADCAST_12"),
    (120, "BROADCAST_13"),
    (121, "BROADCAST_14"),
    (122, "BROADCAST_15"),
    (123, "GROUP_USER_EVENT"),
    (124, "USER_EVENT_0"),
    (125, "USER_EVENT_1"),
    (126, "USER_EVENT_2"),
    (127, "USER_EVENT_3"),
];

pub const MEM_EVENTS: &[(u8, &str)] = &[
    (0, "NONE"),
    (1, "TRUE"),
    (2, "GROUP_0"),
    (3, "TIMER_SYNC"),
    (4, "TIMER_VALUE_REACHED"),
    (5, "PERF_CNT_0"),
    (6, "PERF_CNT_1"),
    (7, "COMBO_EVENT_0"),
    (8, "COMBO_EVENT_1"),
    (9, "COMBO_EVENT_2"),
    (10, "COMBO_EVENT_3"),
    (11, "EDGE_DETECTION_EVENT_0"),
    (12, "EDGE_DETECTION_EVENT_1"),
    (15, "GROUP_WATCHPOINT"),
    (16, "WATCHPOINT_0"),
    (17, "WATCHPOINT_1"),
    (20, "GROUP_DMA_ACTIVITY"),
    (21, "DMA_S2MM_0_START_TASK"),
    (22, "DMA_S2MM_1_START_TASK"),
    (23, "DMA_MM2S_0_START_TASK"),
    (24, "DMA_MM2S_1_START_TASK"),
    (25, "DMA_S2MM_0_FINISHED_BD"),
    (26, "DMA_S2MM_1_FINISHED_BD"),
    (27, "DMA_MM2S_0_FINISHED_BD"),
    (28, "DMA_MM2S_1_FINISHED_BD"),
    (29, "DMA_S2MM_0_FINISHED_TASK"),
    (30, "DMA_S2MM_1_FINISHED_TASK"),
    (31, "DMA_MM2S_0_FINISHED_TASK"),
    (32, "DMA_MM2S_1_FINISHED_TASK"),
    (33, "DMA_S2MM_0_STALLED_LOCK"),
    (34, "DMA_S2MM_1_STALLED_LOCK"),
    (35, "DMA_MM2S_0_STALLED_LOCK"),
    (36, "DMA_MM2S_1_STALLED_LOCK"),
    (37, "DMA_S2MM_0_STREAM_STARVATION"),
    (38, "DMA_S2MM_1_STREAM_STARVATION"),
    (39, "DMA_MM2S_0_STREAM_BACKPRESSURE"),
    (40, "DMA_MM2S_1_STREAM_BACKPRESSURE"),
    (41, "DMA_S2MM_0_MEMORY_BACKPRESSURE"),
    (42, "DMA_S2MM_1_MEMORY_BACKPRESSURE"),
    (43, "DMA_MM2S_0_MEMORY_STARVATION"),
    (44, "DMA_MM2S_1_MEMORY_STARVATION"),
    (45, "GROUP_LOCK"),
    (46, "LOCK_SEL0_ACQ_EQ"),
    (47, "LOCK_SEL0_ACQ_GE"),
    (48, "LOCK_SEL0_REL"),
    (49, "LOCK_SEL0_EQUAL_TO_VALUE"),
    (50, "LOCK_SEL1_ACQ_EQ"),
    (51, "LOCK_SEL1_ACQ_GE"),
    (52, "LOCK_SEL1_REL"),
    (53, "LOCK_SEL1_EQUAL_TO_VALUE"),
    (54, "LOCK_SEL2_ACQ_EQ"),
    (55, "LOCK_SEL2_ACQ_GE"),
    (56, "LOCK_SEL2_REL"),
    (57, "LOCK_SEL2_EQUAL_TO_VALUE"),
    (58, "LOCK_SEL3_ACQ_EQ"),
    (59, "LOCK_SEL3_ACQ_GE"),
    (60, "LOCK_SEL3_REL"),
    (61, "LOCK_SEL3_EQUAL_TO_VALUE"),
    (62, "LOCK_SEL4_ACQ_EQ"),
    (63, "LOCK_SEL4_ACQ_GE"),
    (64, "LOCK_SEL4_REL"),
    (65, "LOCK_SEL4_EQUAL_TO_VALUE"),
    (66, "LOCK_SEL5_ACQ_EQ"),
    (67, "LOCK_SEL5_ACQ_GE"),
    (68, "LOCK_SEL5_REL"),
    (69, "LOCK_SEL5_EQUAL_TO_VALUE"),
    (70, "LOCK_SEL6_ACQ_EQ"),
    (71, "LOCK_SEL6_ACQ_GE"),
    (72, "LOCK_SEL6_REL"),
    (73, "LOCK_SEL6_EQUAL_TO_VALUE"),
    (74, "LOCK_SEL7_ACQ_EQ"),
    (75, "LOCK_SEL7_ACQ_GE"),
    (76, "LOCK_SEL7_REL"),
    (77, "LOCK_SEL7_EQUAL_TO_VALUE"),
    (78, "LOCK_SEL8_ACQ_EQ"),
    (79, "LOCK_SEL8_ACQ_GE"),
    (80, "LOCK_SEL8_REL"),
    (81, "LOCK_SEL8_EQUAL_TO_VALUE"),
    (82, "LOCK_SEL9_ACQ_EQ"),
    (83, "LOCK_SEL9_ACQ_GE"),
    (84, "LOCK_SEL9_REL"),
    (85, "LOCK_SEL9_EQUAL_TO_VALUE"),
    (86, "LOCK_SEL10_ACQ_EQ"),
    (87, "LOCK_SEL10_ACQ_GE"),
    (88, "LOCK_SEL10_REL"),
    (89, "LOCK_SEL10_EQUAL_TO_VALUE"),
    (90, "LOCK_SEL11_ACQ_EQ"),
    (91, "LOCK_SEL11_ACQ_GE"),
    (92, "LOCK_SEL11_REL"),
    (93, "LOCK_SEL11_EQUAL_TO_VALUE"),
    (94, "LOCK_SEL12_ACQ_EQ"),
    (95, "LOCK_SEL12_ACQ_GE"),
    (96, "LOCK_SEL12_REL"),
    (97, "LOCK_SEL12_EQUAL_TO_VALUE"),
    (98, "LOCK_SEL13_ACQ_EQ"),
    (99, "LOCK_SEL13_ACQ_GE"),
    (100, "LOCK_SEL13_REL"),
    (101, "LOCK_SEL13_EQUAL_TO_VALUE"),
    (102, "LOCK_SEL14_ACQ_EQ"),
    (103, "LOCK_SEL14_ACQ_GE"),
    (104, "LOCK_SEL14_REL"),
    (105, "LOCK_SEL14_EQUAL_TO_VALUE"),
    (106, "LOCK_SEL15_ACQ_EQ"),
    (107, "LOCK_SEL15_ACQ_GE"),
    (108, "LOCK_SEL15_REL"),
    (109, "LOCK_SEL15_EQUAL_TO_VALUE"),
    (110, "GROUP_MEMORY_CONFLICT"),
    (111, "CONFLICT_DM_BANK_0"),
    (112, "CONFLICT_DM_BANK_1"),
    (113, "CONFLICT_DM_BANK_2"),
    (114, "CONFLICT_DM_BANK_3"),
    (115, "CONFLICT_DM_BANK_4"),
    (116, "CONFLICT_DM_BANK_5"),
    (117, "CONFLICT_DM_BANK_6"),
    (118, "CONFLICT_DM_BANK_7"),
    (119, "GROUP_ERRORS"),
    (120, "DM_ECC_ERROR_SCRUB_CORRECTED"),
    (121, "DM_ECC_ERROR_SCRUB_2BIT"),
    (122, "DM_ECC_ERROR_1BIT"),
    (123, "DM_ECC_ERROR_2BIT"),
    (124, "DMA_S2MM_ERROR"),
    (125, "DMA_MM2S_ERROR"),
    (126, "STREAM_SWITCH_PORT_PARITY_ERROR"),
    (127, "STREAM_PKT_ERROR"),
    (128, "CONTROL_PKT_ERROR"),
    (129, "AXI_MM_SLAVE_ERROR"),
    (130, "LOCK_ERROR"),
    (131, "DMA_TASK_TOKEN_STALL"),
    (132, "GROUP_BROADCAST"),
    (133, "BROADCAST_0"),
    (134, "BROADCAST_1"),
    (135, "BROADCAST_2"),
    (136, "BROADCAST_3"),
    (137, "BROADCAST_4"),
    (138, "BROADCAST_5"),
    (139, "BROADCAST_6"),
    (140, "BROADCAST_7"),
    (141, "BROADCAST_8"),
    (142, "BROADCAST_9"),
    (143, "BROADCAST_10"),
    (144, "BROADCAST_11"),
    (145, "BROADCAST_12"),
    (146, "BROADCAST_13"),
    (147, "BROADCAST_14"),
    (148, "BROADCAST_15"),
    (149, "GROUP_USER_EVENT"),
    (150, "USER_EVENT_0"),
    (151, "USER_EVENT_1"),
    (152, "USER_EVENT_2"),
    (153, "USER_EVENT_3"),
];

pub const SHIM_EVENTS: &[(u8, &str)] = &[
    (0, "NONE"),
    (1, "TRUE"),
    (2, "GROUP_0"),
    (3, "TIMER_SYNC"),
    (4, "TIMER_VALUE_REACHED"),
    (5, "PERF_CNT_0"),
    (6, "PERF_CNT_1"),
    (7, "COMBO_EVENT_0"),
    (8, "COMBO_EVENT_1"),
    (9, "COMBO_EVENT_2"),
    (10, "COMBO_EVENT_3"),
    (11, "EDGE_DETECTION_EVENT_0"),
    (12, "EDGE_DETECTION_EVENT_1"),
    (13, "GROUP_DMA_ACTIVITY"),
    (14, "DMA_S2MM_0_START_TASK"),
    (15, "DMA_S2MM_1_START_TASK"),
    (16, "DMA_MM2S_0_START_TASK"),
    (17, "DMA_MM2S_1_START_TASK"),
    (18, "DMA_S2MM_0_FINISHED_BD"),
    (19, "DMA_S2MM_1_FINISHED_BD"),
    (20, "DMA_MM2S_0_FINISHED_BD"),
    (21, "DMA_MM2S_1_FINISHED_BD"),
    (22, "DMA_S2MM_0_FINISHED_TASK"),
    (23, "DMA_S2MM_1_FINISHED_TASK"),
    (24, "DMA_MM2S_0_FINISHED_TASK"),
    (25, "DMA_MM2S_1_FINISHED_TASK"),
    (26, "DMA_S2MM_0_STALLED_LOCK"),
    (27, "DMA_S2MM_1_STALLED_LOCK"),
    (28, "DMA_MM2S_0_STALLED_LOCK"),
    (29, "DMA_MM2S_1_STALLED_LOCK"),
    (30, "DMA_S2MM_0_STREAM_STARVATION"),
    (31, "DMA_S2MM_1_STREAM_STARVATION"),
    (32, "DMA_MM2S_0_STREAM_BACKPRESSURE"),
    (33, "DMA_MM2S_1_STREAM_BACKPRESSURE"),
    (34, "DMA_S2MM_0_MEMORY_BACKPRESSURE"),
    (35, "DMA_S2MM_1_MEMORY_BACKPRESSURE"),
    (36, "DMA_MM2S_0_MEMORY_STARVATION"),
    (37, "DMA_MM2S_1_MEMORY_STARVATION"),
    (38, "GROUP_LOCK"),
    (39, "LOCK_0_ACQ_EQ"),
    (40, "LOCK_0_ACQ_GE"),
    (41, "LOCK_0_REL"),
    (42, "LOCK_0_EQUAL_TO_VALUE"),
    (43, "LOCK_1_ACQ_EQ"),
    (44, "LOCK_1_ACQ_GE"),
    (45, "LOCK_1_REL"),
    (46, "LOCK_1_EQUAL_TO_VALUE"),
    (47, "LOCK_2_ACQ_EQ"),
    (48, "LOCK_2_ACQ_GE"),
    (49, "LOCK_2_REL"),
    (50, "LOCK_2_EQUAL_TO_VALUE"),
    (51, "LOCK_3_ACQ_EQ"),
    (52, "LOCK_3_ACQ_GE"),
    (53, "LOCK_3_REL"),
    (54, "LOCK_3_EQUAL_TO_VALUE"),
    (55, "LOCK_4_ACQ_EQ"),
    (56, "LOCK_4_ACQ_GE"),
    (57, "LOCK_4_REL"),
    (58, "LOCK_4_EQUAL_TO_VALUE"),
    (59, "LOCK_5_ACQ_EQ"),
    (60, "LOCK_5_ACQ_GE"),
    (61, "LOCK_5_REL"),
    (62, "LOCK_5_EQUAL_TO_VALUE"),
    (63, "LOCK_6_ACQ_EQ"),
    (64, "LOCK_6_ACQ_GE"),
    (65, "LOCK_6_REL"),
    (66, "LOCK_6_EQUAL_TO_VALUE"),
    (67, "LOCK_7_ACQ_EQ"),
    (68, "LOCK_7_ACQ_GE"),
    (69, "LOCK_7_REL"),
    (70, "LOCK_7_EQUAL_TO_VALUE"),
    (71, "LOCK_8_ACQ_EQ"),
    (72, "LOCK_8_ACQ_GE"),
    (73, "LOCK_8_REL"),
    (74, "LOCK_8_EQUAL_TO_VALUE"),
    (75, "LOCK_9_ACQ_EQ"),
    (76, "LOCK_9_ACQ_GE"),
    (77, "LOCK_9_REL"),
    (78, "LOCK_9_EQUAL_TO_VALUE"),
    (79, "LOCK_10_ACQ_EQ"),
    (80, "LOCK_10_ACQ_GE"),
    (81, "LOCK_10_REL"),
    (82, "LOCK_10_EQUAL_TO_VALUE"),
    (83, "LOCK_11_ACQ_EQ"),
    (84, "LOCK_11_ACQ_GE"),
    (85, "LOCK_11_REL"),
    (86, "LOCK_11_EQUAL_TO_VALUE"),
    (87, "LOCK_12_ACQ_EQ"),
    (88, "LOCK_12_ACQ_GE"),
    (89, "LOCK_12_REL"),
    (90, "LOCK_12_EQUAL_TO_VALUE"),
    (91, "LOCK_13_ACQ_EQ"),
    (92, "LOCK_13_ACQ_GE"),
    (93, "LOCK_13_REL"),
    (94, "LOCK_13_EQUAL_TO_VALUE"),
    (95, "LOCK_14_ACQ_EQ"),
    (96, "LOCK_14_ACQ_GE"),
    (97, "LOCK_14_REL"),
    (98, "LOCK_14_EQUAL_TO_VALUE"),
    (99, "LOCK_15_ACQ_EQ"),
    (100, "LOCK_15_ACQ_GE"),
    (101, "LOCK_15_REL"),
    (102, "LOCK_15_EQUAL_TO_VALUE"),
    (103, "GROUP_ERRORS"),
    (104, "AXI_MM_SLAVE_TILE_ERROR"),
    (105, "CONTROL_PKT_ERROR"),
    (106, "AXI_MM_DECODE_NSU_ERROR"),
    (107, "AXI_MM_SLAVE_NSU_ERROR"),
    (108, "AXI_MM_UNSUPPORTED_TRAFFIC"),
    (109, "AXI_MM_UNSECURE_ACCESS_IN_SECURE_MODE"),
    (110, "AXI_MM_BYTE_STROBE_ERROR"),
    (111, "DMA_S2MM_ERROR"),
    (112, "DMA_MM2S_ERROR"),
    (113, "LOCK_ERROR"),
    (114, "DMA_TASK_TOKEN_STALL"),
    (115, "GROUP_STREAM_SWITCH"),
    (116, "PORT_IDLE_0"),
    (117, "PORT_RUNNING_0"),
    (118, "PORT_STALLED_0"),
    (119, "PORT_TLAST_0"),
    (120, "PORT_IDLE_1"),
    (121, "PORT_RUNNING_1"),
    (122, "PORT_STALLED_1"),
    (123, "PORT_TLAST_1"),
    (124, "PORT_IDLE_2"),
    (125, "PORT_RUNNING_2"),
    (126, "PORT_STALLED_2"),
    (127, "PORT_TLAST_2"),
    (128, "PORT_IDLE_3"),
    (129, "PORT_RUNNING_3"),
    (130, "PORT_STALLED_3"),
    (131, "PORT_TLAST_3"),
    (132, "PORT_IDLE_4"),
    (133, "PORT_RUNNING_4"),
    (134, "PORT_STALLED_4"),
    (135, "PORT_TLAST_4"),
    (136, "PORT_IDLE_5"),
    (137, "PORT_RUNNING_5"),
    (138, "PORT_STALLED_5"),
    (139, "PORT_TLAST_5"),
    (140, "PORT_IDLE_6"),
    (141, "PORT_RUNNING_6"),
    (142, "PORT_STALLED_6"),
    (143, "PORT_TLAST_6"),
    (144, "PORT_IDLE_7"),
    (145, "PORT_RUNNING_7"),
    (146, "PORT_STALLED_7"),
    (147, "PORT_TLAST_7"),
    (148, "GROUP_BROADCAST_A"),
    (149, "BROADCAST_A_0"),
    (150, "BROADCAST_A_1"),
    (151, "BROADCAST_A_2"),
    (152, "BROADCAST_A_3"),
    (153, "BROADCAST_A_4"),
    (154, "BROADCAST_A_5"),
    (155, "BROADCAST_A_6"),
    (156, "BROADCAST_A_7"),
    (157, "BROADCAST_A_8"),
    (158, "BROADCAST_A_9"),
    (159, "BROADCAST_A_10"),
    (160, "BROADCAST_A_11"),
    (161, "BROADCAST_A_12"),
    (162, "BROADCAST_A_13"),
    (163, "BROADCAST_A_14"),
    (164, "BROADCAST_A_15"),
    (165, "GROUP_USER_EVENT"),
    (166, "USER_EVENT_0"),
    (167, "USER_EVENT_1"),
];

pub const MEMTILE_EVENTS: &[(u8, &str)] = &[
    (0, "NONE"),
    (1, "TRUE"),
    (2, "GROUP_0"),
    (3, "TIMER_SYNC"),
    (4, "TIMER_VALUE_REACHED"),
    (5, "PERF_CNT_0"),
    (6, "PERF_CNT_1"),
    (7, "PERF_CNT_2"),
    (8, "PERF_CNT_3"),
    (9, "COMBO_EVENT_0"),
    (10, "COMBO_EVENT_1"),
    (11, "COMBO_EVENT_2"),
    (12, "COMBO_EVENT_3"),
    (13, "EDGE_DETECTION_EVENT_0"),
    (14, "EDGE_DETECTION_EVENT_1"),
    (15, "GROUP_WATCHPOINT"),
    (16, "WATCHPOINT_0"),
    (17, "WATCHPOINT_1"),
    (18, "WATCHPOINT_2"),
    (19, "WATCHPOINT_3"),
    (20, "GROUP_DMA_ACTIVITY"),
    (21, "DMA_S2MM_SEL0_START_TASK"),
    (22, "DMA_S2MM_SEL1_START_TASK"),
    (23, "DMA_MM2S_SEL0_START_TASK"),
    (24, "DMA_MM2S_SEL1_START_TASK"),
    (25, "DMA_S2MM_SEL0_FINISHED_BD"),
    (26, "DMA_S2MM_SEL1_FINISHED_BD"),
    (27, "DMA_MM2S_SEL0_FINISHED_BD"),
    (28, "DMA_MM2S_SEL1_FINISHED_BD"),
    (29, "DMA_S2MM_SEL0_FINISHED_TASK"),
    (30, "DMA_S2MM_SEL1_FINISHED_TASK"),
    (31, "DMA_MM2S_SEL0_FINISHED_TASK"),
    (32, "DMA_MM2S_SEL1_FINISHED_TASK"),
    (33, "DMA_S2MM_SEL0_STALLED_LOCK"),
    (34, "DMA_S2MM_SEL1_STALLED_LOCK"),
    (35, "DMA_MM2S_SEL0_STALLED_LOCK"),
    (36, "DMA_MM2S_SEL1_STALLED_LOCK"),
    (37, "DMA_S2MM_SEL0_STREAM_STARVATION"),
    (38, "DMA_S2MM_SEL1_STREAM_STARVATION"),
    (39, "DMA_MM2S_SEL0_STREAM_BACKPRESSURE"),
    (40, "DMA_MM2S_SEL1_STREAM_BACKPRESSURE"),
    (41, "DMA_S2MM_SEL0_MEMORY_BACKPRESSURE"),
    (42, "DMA_S2MM_SEL1_MEMORY_BACKPRESSURE"),
    (43, "DMA_MM2S_SEL0_MEMORY_STARVATION"),
    (44, "DMA_MM2S_SEL1_MEMORY_STARVATION"),
    (45, "GROUP_LOCK"),
    (46, "LOCK_SEL0_ACQ_EQ"),
    (47, "LOCK_SEL0_ACQ_GE"),
    (48, "LOCK_SEL0_REL"),
    (49, "LOCK_SEL0_EQUAL_TO_VALUE"),
    (50, "LOCK_SEL1_ACQ_EQ"),
    (51, "LOCK_SEL1_ACQ_GE"),
    (52, "LOCK_SEL1_REL"),
    (53, "LOCK_SEL1_EQUAL_TO_VALUE"),
    (54, "LOCK_SEL2_ACQ_EQ"),
    (55, "LOCK_SEL2_ACQ_GE"),
    (56, "LOCK_SEL2_REL"),
    (57, "LOCK_SEL2_EQUAL_TO_VALUE"),
    (58, "LOCK_SEL3_ACQ_EQ"),
    (59, "LOCK_SEL3_ACQ_GE"),
    (60, "LOCK_SEL3_REL"),
    (61, "LOCK_SEL3_EQUAL_TO_VALUE"),
    (62, "LOCK_SEL4_ACQ_EQ"),
    (63, "LOCK_SEL4_ACQ_GE"),
    (64, "LOCK_SEL4_REL"),
    (65, "LOCK_SEL4_EQUAL_TO_VALUE"),
    (66, "LOCK_SEL5_ACQ_EQ"),
    (67, "LOCK_SEL5_ACQ_GE"),
    (68, "LOCK_SEL5_REL"),
    (69, "LOCK_SEL5_EQUAL_TO_VALUE"),
    (70, "LOCK_SEL6_ACQ_EQ"),
    (71, "LOCK_SEL6_ACQ_GE"),
    (72, "LOCK_SEL6_REL"),
    (73, "LOCK_SEL6_EQUAL_TO_VALUE"),
    (74, "LOCK_SEL7_ACQ_EQ"),
    (75, "LOCK_SEL7_ACQ_GE"),
    (76, "LOCK_SEL7_REL"),
    (77, "LOCK_SEL7_EQUAL_TO_VALUE"),
    (78, "GROUP_STREAM_SWITCH"),
    (79, "PORT_IDLE_0"),
    (80, "PORT_RUNNING_0"),
    (81, "PORT_STALLED_0"),
    (82, "PORT_TLAST_0"),
    (83, "PORT_IDLE_1"),
    (84, "PORT_RUNNING_1"),
    (85, "PORT_STALLED_1"),
    (86, "PORT_TLAST_1"),
    (87, "PORT_IDLE_2"),
    (88, "PORT_RUNNING_2"),
    (89, "PORT_STALLED_2"),
    (90, "PORT_TLAST_2"),
    (91, "PORT_IDLE_3"),
    (92, "PORT_RUNNING_3"),
    (93, "PORT_STALLED_3"),
    (94, "PORT_TLAST_3"),
    (95, "PORT_IDLE_4"),
    (96, "PORT_RUNNING_4"),
    (97, "PORT_STALLED_4"),
    (98, "PORT_TLAST_4"),
    (99, "PORT_IDLE_5"),
    (100, "PORT_RUNNING_5"),
    (101, "PORT_STALLED_5"),
    (102, "PORT_TLAST_5"),
    (103, "PORT_IDLE_6"),
    (104, "PORT_RUNNING_6"),
    (105, "PORT_STALLED_6"),
    (106, "PORT_TLAST_6"),
    (107, "PORT_IDLE_7"),
    (108, "PORT_RUNNING_7"),
    (109, "PORT_STALLED_7"),
    (110, "PORT_TLAST_7"),
    (111, "GROUP_MEMORY_CONFLICT"),
    (112, "CONFLICT_DM_BANK_0"),
    (113, "CONFLICT_DM_BANK_1"),
    (114, "CONFLICT_DM_BANK_2"),
    (115, "CONFLICT_DM_BANK_3"),
    (116, "CONFLICT_DM_BANK_4"),
    (117, "CONFLICT_DM_BANK_5"),
    (118, "CONFLICT_DM_BANK_6"),
    (119, "CONFLICT_DM_BANK_7"),
    (120, "CONFLICT_DM_BANK_8"),
    (121, "CONFLICT_DM_BANK_9"),
    (122, "CONFLICT_DM_BANK_10"),
    (123, "CONFLICT_DM_BANK_11"),
    (124, "CONFLICT_DM_BANK_12"),
    (125, "CONFLICT_DM_BANK_13"),
    (126, "CONFLICT_DM_BANK_14"),
    (127, "CONFLICT_DM_BANK_15"),
    (128, "GROUP_ERRORS"),
    (129, "DM_ECC_ERROR_SCRUB_CORRECTED"),
    (130, "DM_ECC_ERROR_SCRUB_2BIT"),
    (131, "DM_ECC_ERROR_1BIT"),
    (132, "DM_ECC_ERROR_2BIT"),
    (133, "DMA_S2MM_ERROR"),
    (134, "DMA_MM2S_ERROR"),
    (135, "STREAM_SWITCH_PORT_PARITY_ERROR"),
    (136, "STREAM_PKT_ERROR"),
    (137, "CONTROL_PKT_ERROR"),
    (138, "AXI_MM_SLAVE_ERROR"),
    (139, "LOCK_ERROR"),
    (140, "DMA_TASK_TOKEN_STALL"),
    (141, "GROUP_BROADCAST"),
    (142, "BROADCAST_0"),
    (143, "BROADCAST_1"),
    (144, "BROADCAST_2"),
    (145, "BROADCAST_3"),
    (146, "BROADCAST_4"),
    (147, "BROADCAST_5"),
    (148, "BROADCAST_6"),
    (149, "BROADCAST_7"),
    (150, "BROADCAST_8"),
    (151, "BROADCAST_9"),
    (152, "BROADCAST_10"),
    (153, "BROADCAST_11"),
    (154, "BROADCAST_12"),
    (155, "BROADCAST_13"),
    (156, "BROADCAST_14"),
    (157, "BROADCAST_15"),
    (158, "GROUP_USER_EVENT"),
    (159, "USER_EVENT_0"),
    (160, "USER_EVENT_1"),
];
