/*!
# `GOTO <label>`

## Purpose
Immediately and unconditionally move execution to the specified label.

## Example
```text
10 GOTO 30
20 PRINT "SKIPPED"
30 PRINT "HERE"
RUN
HERE
```

*/
